use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_closed_and_unscrolled() {
    let state = UiState::default();
    assert!(!state.menu_open);
    assert!(!state.scrolled);
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn apply_scroll_threshold_is_exclusive() {
    let mut state = UiState::default();
    assert!(!state.apply_scroll(SCROLL_THRESHOLD_PX));
    assert!(!state.scrolled);
    assert!(state.apply_scroll(SCROLL_THRESHOLD_PX + 1.0));
    assert!(state.scrolled);
}

#[test]
fn apply_scroll_reports_only_changes() {
    let mut state = UiState::default();
    assert!(state.apply_scroll(400.0));
    assert!(!state.apply_scroll(800.0));
    assert!(state.apply_scroll(0.0));
    assert!(!state.scrolled);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn toggle_and_close_menu() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
    state.toggle_menu();
    state.close_menu();
    assert!(!state.menu_open);
}
