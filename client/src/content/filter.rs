//! Client-side category filtering for project and gallery tabs.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Label of the catch-all tab.
pub const ALL_LABEL: &str = "All";

/// Anything listed under a category tab.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Active filter tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(&'static str),
}

impl CategoryFilter {
    /// Map a tab label to a filter; [`ALL_LABEL`] selects everything.
    pub fn from_label(label: &'static str) -> Self {
        if label == ALL_LABEL { Self::All } else { Self::Only(label) }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => ALL_LABEL,
            Self::Only(category) => category,
        }
    }

    pub fn matches(self, item: &impl Categorized) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category() == category,
        }
    }
}

/// Items matching `filter`, in their original order.
pub fn filter_by_category<T: Categorized>(items: &[T], filter: CategoryFilter) -> Vec<&T> {
    items.iter().filter(|item| filter.matches(*item)).collect()
}
