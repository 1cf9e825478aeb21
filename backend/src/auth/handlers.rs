//! Handler functions for authentication-related API endpoints.
//!
//! These functions parse the incoming request, hand it to `auth::service`, and
//! translate the outcome into an HTTP response. Service errors are converted
//! here and nowhere else.

use crate::api::common::{HttpError, json_rejection_to_http, service_error_to_http};
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::errors::ServiceError;
use crate::state::AppState;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Json as ResponseJson, Response},
};

/// Handle admin login request
#[axum::debug_handler]
pub async fn login(
    Extension(state): Extension<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, HttpError> {
    let Json(payload) = payload.map_err(json_rejection_to_http)?;

    let auth_service = AuthService::new(&state.config, state.users.as_ref());

    match auth_service.login(payload).await {
        Ok(LoginOutcome::Authenticated(response)) => {
            let access_cookie = session_cookie(
                "accessToken",
                &response.access_token,
                response.access_expires_in,
            )
            .map_err(service_error_to_http)?;
            let refresh_cookie = session_cookie(
                "refreshToken",
                &response.refresh_token,
                response.refresh_expires_in,
            )
            .map_err(service_error_to_http)?;

            let mut http_response = (StatusCode::OK, ResponseJson(response)).into_response();
            let headers = http_response.headers_mut();
            headers.append(SET_COOKIE, access_cookie);
            headers.append(SET_COOKIE, refresh_cookie);
            Ok(http_response)
        }
        Ok(LoginOutcome::Rejected(result)) => {
            Ok((StatusCode::UNAUTHORIZED, ResponseJson(result)).into_response())
        }
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Get the identity carried by the presented access token
#[axum::debug_handler]
pub async fn me(Extension(claims): Extension<Claims>) -> ResponseJson<CurrentUser> {
    ResponseJson(CurrentUser {
        subject: claims.subject().to_string(),
        role: claims.role().to_string(),
        expires_at: claims.exp,
    })
}

fn session_cookie(name: &str, token: &str, max_age: u64) -> Result<HeaderValue, ServiceError> {
    HeaderValue::from_str(&format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax; Max-Age={}",
        name, token, max_age
    ))
    .map_err(|e| ServiceError::internal_error(format!("Invalid {} cookie: {}", name, e)))
}
