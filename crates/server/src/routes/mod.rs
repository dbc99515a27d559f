//! HTTP routes.

mod health;

pub use health::*;

use anyhow::Result;
use axum::{Router, routing::get};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Build the application router.
///
/// Files under `dist` are served as-is. Any other path gets `index.html` with
/// status 200 so the frontend router can resolve history-mode URLs such as
/// `/predict` after a reload.
pub fn router(config: &Config) -> Result<Router> {
    let spa = ServeDir::new(&config.dist)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(config.index_html()));

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(spa)
        .layer(config.cors_layer()?)
        .layer(TraceLayer::new_for_http()))
}
