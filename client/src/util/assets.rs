//! Image resolution with fallback.
//!
//! Broken images are never surfaced as errors. Each image site picks a
//! [`AssetFallback`] policy and the `FallbackImage` component swaps to it when
//! the browser reports a load failure.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

/// What to render in place of an image that failed to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetFallback {
    /// Solid gradient block sized like the image.
    Placeholder,
    /// Initials badge (team members, testimonial authors).
    Initials(String),
    /// Caption text centred in the block (project thumbnails).
    Caption(String),
    /// Drop the image entirely (decorative logo mark).
    Hide,
}

impl AssetFallback {
    pub fn initials_for(name: &str) -> Self {
        Self::Initials(initials(name))
    }

    /// CSS class for the fallback block.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Placeholder => "asset-fallback asset-fallback--placeholder",
            Self::Initials(_) => "asset-fallback asset-fallback--initials",
            Self::Caption(_) => "asset-fallback asset-fallback--caption",
            Self::Hide => "asset-fallback asset-fallback--hidden",
        }
    }

    /// Text drawn inside the fallback block, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Initials(text) | Self::Caption(text) => Some(text),
            Self::Placeholder | Self::Hide => None,
        }
    }
}

/// Up to two uppercase initials from the first and last words of `name`.
pub fn initials(name: &str) -> String {
    let words = name.split_whitespace().collect::<Vec<_>>();
    let picks = match words.as_slice() {
        [] => Vec::new(),
        [only] => vec![*only],
        [first, .., last] => vec![*first, *last],
    };
    picks
        .iter()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
