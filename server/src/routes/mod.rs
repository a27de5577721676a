//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is a client-rendered SPA, so the server only hosts the built
//! bundle. Files under the site directory are served as-is; every other path
//! gets `index.html` with status 200 and the client router decides what to
//! render, including its own not-found view.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub const INDEX_FILE: &str = "index.html";

/// Static host for the built site plus a liveness probe.
pub fn app(site_dir: &Path) -> Router {
    let spa = ServeDir::new(site_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(site_dir.join(INDEX_FILE)));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(spa)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
