//! Songshelf - a song library HTTP service.
//!
//! Stores song records in SQLite, serves a small CRUD API over them, and
//! enriches newly-added songs with details from an external info API.

pub mod config;
pub mod db;
pub mod enrichment;
pub mod error;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;
use crate::db::SqliteSongStore;
use crate::enrichment::SongInfoClient;
use crate::service::SongService;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("songshelf=info".parse().unwrap()))
        .init();

    let pool = db::init_db(&config.database_url).await?;
    let store = SqliteSongStore::new(pool);
    let provider = SongInfoClient::new(&config.provider_url);
    let service = SongService::new(Arc::new(store), Arc::new(provider));

    let app = routes::router(AppState { service });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, provider = %config.provider_url, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when ctrl-c is received, letting in-flight requests finish.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {e}");
        return;
    }
    tracing::info!("shutting down");
}
