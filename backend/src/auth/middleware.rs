//! Middleware for protecting authenticated routes.

use crate::state::AppState;
use crate::utils::jwt::{JwtUtils, TokenType};
use axum::{
    extract::Request,
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

/// JWT authentication middleware
///
/// Accepts only access tokens and stores their claims in the request extensions.
pub async fn jwt_auth(mut request: Request, next: Next) -> Result<Response, StatusCode> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let state = request
        .extensions()
        .get::<AppState>()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    let jwt_utils = JwtUtils::new(&state.config).map_err(|e| {
        tracing::error!("Cannot validate bearer token: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    match jwt_utils.validate_token(token, TokenType::Access) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(e) => {
            tracing::debug!("Rejected bearer token: {}", e);
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
