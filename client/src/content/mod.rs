//! Static site content.
//!
//! Everything here is compile-time data. Pages read it directly; the only
//! runtime operation is category filtering.

pub mod filter;
pub mod gallery;
pub mod legal;
pub mod projects;
pub mod services;
pub mod site;
pub mod team;
pub mod testimonials;
