//! Wrap-around index stepping for the lightbox and testimonial carousel.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Step `current` by `delta` within `0..len`, wrapping at both ends.
///
/// Returns `None` for an empty collection.
pub fn cycle_index(len: usize, current: usize, delta: isize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = isize::try_from(len).ok()?;
    let current = isize::try_from(current).ok()?.rem_euclid(len);
    usize::try_from((current + delta).rem_euclid(len)).ok()
}
