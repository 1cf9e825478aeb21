//! HTTP surface of the service: router assembly and shared response helpers.

pub mod common;

use crate::auth;
use crate::config::Config;
use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    response::Json,
    routing::get,
};
use serde_json::{Value, json};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Builds the application router with all routes and layers.
pub fn app(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.config)?;

    Ok(Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .merge(auth::routes::auth_router())
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Restricts cross-origin access to the storefront frontend when one is configured.
fn cors_layer(config: &Config) -> Result<CorsLayer> {
    match &config.frontend_url {
        Some(url) => {
            let origin = HeaderValue::from_str(url.trim_end_matches('/'))
                .with_context(|| format!("FRONTEND_URL is not a valid origin: {}", url))?;
            Ok(CorsLayer::new()
                .allow_origin(AllowOrigin::list([origin]))
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_credentials(true))
        }
        None => Ok(CorsLayer::permissive()),
    }
}

async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
