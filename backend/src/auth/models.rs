//! Data structures for authentication-related entities.
//!
//! Wire formats for the login endpoint: the posted credential, the credential
//! check result, and the token-bearing login response.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Outcome of checking a credential against the configured administrator.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    pub message: String,
}

impl CredentialResult {
    pub fn admin_authenticated() -> Self {
        Self {
            success: true,
            is_admin: Some(true),
            message: "Admin authenticated".to_string(),
        }
    }

    pub fn invalid_credentials() -> Self {
        Self {
            success: false,
            is_admin: None,
            message: "Invalid credentials".to_string(),
        }
    }
}

/// Login response: the credential result merged with the issued tokens
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(flatten)]
    pub result: CredentialResult,
    pub access_token: String,
    pub refresh_token: String,
    #[serde(skip)]
    pub access_expires_in: u64,
    #[serde(skip)]
    pub refresh_expires_in: u64,
}

/// Result of a single login attempt.
#[derive(Debug)]
pub enum LoginOutcome {
    Authenticated(LoginResponse),
    Rejected(CredentialResult),
}

/// Identity carried by a validated access token
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub subject: String,
    pub role: String,
    pub expires_at: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_flattens_result() {
        let response = LoginResponse {
            result: CredentialResult::admin_authenticated(),
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            access_expires_in: 60,
            refresh_expires_in: 120,
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": true,
                "isAdmin": true,
                "message": "Admin authenticated",
                "accessToken": "a",
                "refreshToken": "r"
            })
        );
    }

    #[test]
    fn test_invalid_credentials_omits_is_admin() {
        assert_eq!(
            serde_json::to_value(CredentialResult::invalid_credentials()).unwrap(),
            json!({ "success": false, "message": "Invalid credentials" })
        );
    }

    #[test]
    fn test_login_request_requires_both_fields() {
        let request = LoginRequest {
            username: String::new(),
            password: "pw".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(!errors.field_errors().contains_key("password"));
    }
}
