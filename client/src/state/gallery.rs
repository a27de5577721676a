//! Gallery tab filter and lightbox navigation.
//!
//! The lightbox steps through the images visible under the active tab, so
//! switching tabs closes it rather than leaving it pointed at a hidden image.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::content::filter::{CategoryFilter, filter_by_category};
use crate::content::gallery::{GALLERY_IMAGES, GalleryImage};
use crate::util::carousel::cycle_index;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub filter: CategoryFilter,
    /// Index into [`GalleryState::visible`] of the open image.
    pub open: Option<usize>,
}

impl GalleryState {
    pub fn visible(&self) -> Vec<&'static GalleryImage> {
        Self::images_for(self.filter)
    }

    /// Images shown under `filter`. The grid depends on the filter alone, so
    /// lightbox navigation never re-renders it.
    pub fn images_for(filter: CategoryFilter) -> Vec<&'static GalleryImage> {
        filter_by_category(GALLERY_IMAGES, filter)
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.open = None;
        }
    }

    pub fn open_at(&mut self, index: usize) {
        if index < self.visible().len() {
            self.open = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<&'static GalleryImage> {
        self.visible().get(self.open?).copied()
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn prev(&mut self) {
        self.step(-1);
    }

    /// Apply a keyboard key while the lightbox is open. Returns whether the
    /// key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            "Escape" => self.close(),
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            _ => return false,
        }
        true
    }

    fn step(&mut self, delta: isize) {
        let Some(current) = self.open else {
            return;
        };
        self.open = cycle_index(self.visible().len(), current, delta);
    }
}
