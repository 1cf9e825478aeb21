//! Error handling utilities for API responses.
//!
//! All failures leave the service as `<status> { "error": message }`.

use crate::errors::ServiceError;
use axum::{Json, extract::rejection::JsonRejection, http::StatusCode};
use serde::{Deserialize, Serialize};

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type HttpError = (StatusCode, Json<ErrorBody>);

/// Converts ServiceError to the HTTP status and error body it is reported with
pub fn service_error_to_http(error: ServiceError) -> HttpError {
    let status = error.status_code();
    let message = match &error {
        ServiceError::Validation { message } | ServiceError::Unauthorized { message } => {
            message.clone()
        }
        ServiceError::Configuration { message } | ServiceError::InternalError { message } => {
            tracing::error!("Request failed: {}", error);
            message.clone()
        }
    };

    (status, Json(ErrorBody { error: message }))
}

/// Converts a rejected JSON body into the standard error response
pub fn json_rejection_to_http(rejection: JsonRejection) -> HttpError {
    (
        rejection.status(),
        Json(ErrorBody {
            error: rejection.body_text(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_maps_to_500() {
        let (status, Json(body)) =
            service_error_to_http(ServiceError::configuration("JWT secret not found in env"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "JWT secret not found in env");
    }

    #[test]
    fn test_validation_error_maps_to_400() {
        let (status, Json(body)) =
            service_error_to_http(ServiceError::validation("username: Username is required"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "username: Username is required");
    }
}
