//! Network-facing client modules.
//!
//! The site has a single outbound call: the contact form POST.

pub mod api;
pub mod types;
