//! Defines the HTTP routes specifically for authentication.

use crate::auth::handlers::*;
use crate::auth::middleware::*;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/getAccess", post(login))
        .route("/me", get(me).layer(middleware::from_fn(jwt_auth)))
}
