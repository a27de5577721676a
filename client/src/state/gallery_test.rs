use super::*;

fn interior() -> CategoryFilter {
    CategoryFilter::from_label("Interior")
}

#[test]
fn starts_closed_on_all() {
    let state = GalleryState::default();
    assert_eq!(state.filter, CategoryFilter::All);
    assert!(!state.is_open());
    assert_eq!(state.visible().len(), GALLERY_IMAGES.len());
}

#[test]
fn filter_limits_visible_images() {
    let mut state = GalleryState::default();
    state.set_filter(interior());
    let visible = state.visible();
    assert!(!visible.is_empty());
    assert!(visible.iter().all(|img| img.category == "Interior"));
}

#[test]
fn open_out_of_range_is_ignored() {
    let mut state = GalleryState::default();
    state.open_at(GALLERY_IMAGES.len());
    assert!(!state.is_open());
}

#[test]
fn next_and_prev_wrap() {
    let mut state = GalleryState::default();
    let last = GALLERY_IMAGES.len() - 1;

    state.open_at(last);
    state.next();
    assert_eq!(state.open, Some(0));
    state.prev();
    assert_eq!(state.open, Some(last));
    assert_eq!(state.current().map(|img| img.id), Some(GALLERY_IMAGES[last].id));
}

#[test]
fn navigation_stays_within_filtered_list() {
    let mut state = GalleryState::default();
    state.set_filter(interior());
    let count = state.visible().len();
    state.open_at(0);
    for _ in 0..count * 2 {
        state.next();
        assert_eq!(state.current().map(|img| img.category), Some("Interior"));
    }
}

#[test]
fn changing_filter_closes_lightbox() {
    let mut state = GalleryState::default();
    state.open_at(2);
    state.set_filter(interior());
    assert!(!state.is_open());
}

#[test]
fn reselecting_same_filter_keeps_lightbox() {
    let mut state = GalleryState::default();
    state.open_at(2);
    state.set_filter(CategoryFilter::All);
    assert_eq!(state.open, Some(2));
}

#[test]
fn keyboard_navigation() {
    let mut state = GalleryState::default();
    assert!(!state.handle_key("ArrowRight"));

    state.open_at(0);
    assert!(state.handle_key("ArrowRight"));
    assert_eq!(state.open, Some(1));
    assert!(state.handle_key("ArrowLeft"));
    assert_eq!(state.open, Some(0));
    assert!(!state.handle_key("Enter"));
    assert!(state.handle_key("Escape"));
    assert!(!state.is_open());
}

#[test]
fn next_while_closed_is_noop() {
    let mut state = GalleryState::default();
    state.next();
    state.prev();
    assert!(!state.is_open());
}

#[test]
fn lightbox_navigation_leaves_grid_images_unchanged() {
    let mut state = GalleryState::default();
    state.set_filter(interior());
    let grid = GalleryState::images_for(state.filter);

    state.open_at(0);
    state.next();
    state.prev();
    assert!(state.handle_key("ArrowRight"));
    assert!(state.handle_key("Escape"));

    assert_eq!(state.filter, interior());
    assert_eq!(GalleryState::images_for(state.filter), grid);
    assert_eq!(state.visible(), grid);
}
