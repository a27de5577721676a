//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (filters, lightbox, form
//! submission) and delegates rendering details to `components`.

pub mod about;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod legal;
pub mod not_found;
pub mod project_detail;
pub mod projects;
pub mod services;
