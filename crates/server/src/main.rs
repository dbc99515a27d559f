//! Dashboard web server.
//!
//! Serves the built Yew frontend, falling back to `index.html` so client-side
//! routes survive a page reload.

mod config;
mod routes;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing();

    if !config.index_html().is_file() {
        warn!(
            "{} not found; build the frontend with `trunk build` first",
            config.index_html().display()
        );
    }

    let app = routes::router(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!(
        "Serving {} on http://{}",
        config.dist.display(),
        config.bind
    );

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Initialize logging. `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("server=info,tower_http=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
