//! Credential lookup for the storefront administrator.
//!
//! There is no persisted user table: the only account is the administrator
//! whose name and password come from configuration.

use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::models::CredentialResult;
use crate::config::Config;
use crate::errors::ServiceResult;

/// Source of truth for checking login credentials.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Checks `username`/`password` against the administrator identity.
    ///
    /// A mismatch is reported inside the returned `CredentialResult`, not as an error.
    async fn find_admin(&self, username: &str, password: &str) -> ServiceResult<CredentialResult>;
}

/// Repository backed by the `ADMIN_NAME` / `ADMIN_PASSWORD` settings.
pub struct AdminUserRepository {
    config: Arc<Config>,
}

impl AdminUserRepository {
    pub fn new(config: Arc<Config>) -> Self {
        if config.admin_name.is_none() || config.admin_password.is_none() {
            tracing::warn!("ADMIN_NAME or ADMIN_PASSWORD not set, every login will be rejected");
        }
        Self { config }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        match (&self.config.admin_name, &self.config.admin_password) {
            (Some(name), Some(secret)) => username == name && password == secret,
            _ => false,
        }
    }
}

#[async_trait]
impl UserRepository for AdminUserRepository {
    async fn find_admin(&self, username: &str, password: &str) -> ServiceResult<CredentialResult> {
        tracing::debug!(username, "Checking admin credentials");

        if self.matches(username, password) {
            Ok(CredentialResult::admin_authenticated())
        } else {
            tracing::warn!(username, "Rejected login attempt");
            Ok(CredentialResult::invalid_credentials())
        }
    }
}
