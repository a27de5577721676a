//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`contact`, `gallery`, `ui`) so individual
//! pages can depend on small focused models.

pub mod contact;
pub mod gallery;
pub mod ui;
