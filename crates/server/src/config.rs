//! Server configuration from command-line flags and environment.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Static host for the dashboard frontend.
#[derive(Parser, Debug, Clone)]
#[command(name = "dashboard-server")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "DASHBOARD_BIND", default_value = "0.0.0.0:5970")]
    pub bind: SocketAddr,

    /// Directory holding the built frontend (index.html, wasm, assets)
    #[arg(long, env = "DASHBOARD_DIST", default_value = "crates/frontend/dist")]
    pub dist: PathBuf,

    /// Origins allowed by CORS (repeat or comma separate; any origin when unset)
    #[arg(
        long = "cors-origin",
        env = "DASHBOARD_CORS_ORIGIN",
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Config serving `dist` with every other setting at its default.
    #[cfg(test)]
    pub fn for_dist(dist: impl Into<PathBuf>) -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 5970)),
            dist: dist.into(),
            cors_origins: Vec::new(),
        }
    }

    /// Page served for every path that is not a file in `dist`.
    pub fn index_html(&self) -> PathBuf {
        self.dist.join("index.html")
    }

    /// Build the CORS layer for the configured origins.
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        let origin = if self.cors_origins.is_empty() {
            AllowOrigin::from(Any)
        } else {
            let origins = self
                .cors_origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin)
                        .with_context(|| format!("Invalid CORS origin: {origin:?}"))
                })
                .collect::<Result<Vec<_>>>()?;
            AllowOrigin::list(origins)
        };

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any))
    }
}
