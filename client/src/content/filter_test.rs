use super::*;

#[derive(Debug, PartialEq)]
struct Item {
    name: &'static str,
    category: &'static str,
}

impl Categorized for Item {
    fn category(&self) -> &str {
        self.category
    }
}

const ITEMS: &[Item] = &[
    Item { name: "a", category: "Residential" },
    Item { name: "b", category: "Commercial" },
    Item { name: "c", category: "Residential" },
    Item { name: "d", category: "Public" },
    Item { name: "e", category: "Residential" },
];

#[test]
fn filter_returns_exact_matches_in_order() {
    let hits = filter_by_category(ITEMS, CategoryFilter::Only("Residential"));
    assert_eq!(hits.iter().map(|i| i.name).collect::<Vec<_>>(), vec!["a", "c", "e"]);
}

#[test]
fn filter_all_returns_everything() {
    assert_eq!(filter_by_category(ITEMS, CategoryFilter::All).len(), ITEMS.len());
}

#[test]
fn filter_unknown_category_is_empty() {
    assert!(filter_by_category(ITEMS, CategoryFilter::Only("Landscape")).is_empty());
}

#[test]
fn filter_is_case_sensitive() {
    assert!(filter_by_category(ITEMS, CategoryFilter::Only("residential")).is_empty());
}

#[test]
fn from_label_maps_all_tab() {
    assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_label("Public"), CategoryFilter::Only("Public"));
    assert_eq!(CategoryFilter::Only("Public").label(), "Public");
    assert_eq!(CategoryFilter::All.label(), ALL_LABEL);
}
