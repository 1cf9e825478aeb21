//! Main entry point for the storefront admin authentication backend.
//!
//! Loads configuration once, builds the Axum router and serves the admin
//! login endpoint that issues access and refresh tokens.

mod api;
mod auth;
mod config;
mod errors;
mod repositories;
mod state;
mod utils;

use anyhow::{Context, Result};
use config::Config;
use state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    if config.jwt_secret.is_none() {
        tracing::warn!("JWT_KEY not set, logins will fail until it is configured");
    }

    if config.mongo_uri.is_some() {
        tracing::debug!("MONGO_URI is set but no storage backend is used");
    }

    let server_port = config.server_port;
    let app = api::app(AppState::new(config))?;

    let bind_address = format!("0.0.0.0:{}", server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    info!("Starting storefront auth server on port {}", server_port);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
