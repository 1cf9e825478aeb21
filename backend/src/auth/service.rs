//! Core business logic for the authentication system.

use crate::auth::models::*;
use crate::config::Config;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt::JwtUtils;
use validator::{Validate, ValidationErrors};

/// Role granted to every successfully authenticated login.
pub const ADMIN_ROLE: &str = "admin";

/// Authentication service for handling login and token issuance
pub struct AuthService<'a> {
    config: &'a Config,
    users: &'a dyn UserRepository,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(config: &'a Config, users: &'a dyn UserRepository) -> Self {
        AuthService { config, users }
    }

    /// Authenticate the administrator and issue an access/refresh token pair.
    ///
    /// Tokens are only issued when the credential check succeeds; the signing
    /// secret is resolved at that point.
    pub async fn login(&self, login_request: LoginRequest) -> ServiceResult<LoginOutcome> {
        login_request
            .validate()
            .map_err(|errors| ServiceError::validation(validation_message(&errors)))?;

        let result = self
            .users
            .find_admin(&login_request.username, &login_request.password)
            .await?;

        if !result.success {
            return Ok(LoginOutcome::Rejected(result));
        }

        let jwt_utils = JwtUtils::new(self.config)?;
        let subject = self.config.admin_subject();

        let access_token = jwt_utils.generate_access_token(subject, ADMIN_ROLE)?;
        let refresh_token = jwt_utils.generate_refresh_token(subject, ADMIN_ROLE)?;

        tracing::info!(subject, "Admin authenticated, tokens issued");

        Ok(LoginOutcome::Authenticated(LoginResponse {
            result,
            access_token,
            refresh_token,
            access_expires_in: jwt_utils.access_expires_in(),
            refresh_expires_in: jwt_utils.refresh_expires_in(),
        }))
    }
}

/// Flattens field errors into `field: message` pairs, ordered by field name.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| match &error.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: invalid {}", field, error.code),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
