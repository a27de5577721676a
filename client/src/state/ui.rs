//! Site chrome state shared by the navbar and pages.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (mobile menu, scroll styling) out of
//! page components so the navbar can react without owning scroll listeners
//! per page.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Vertical scroll offset past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl UiState {
    /// Record the window scroll offset. Returns whether `scrolled` changed.
    pub fn apply_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
