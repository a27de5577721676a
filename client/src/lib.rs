//! # bhardwaj-client
//!
//! Leptos + WASM frontend for the Bhardwaj Architect marketing site.
//!
//! This crate contains the routed pages, presentational components, the
//! theme store and scroll-reveal coordinator, the contact form state and its
//! single outbound call, and the site's static content. Browser bindings are
//! gated behind the `csr` feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
