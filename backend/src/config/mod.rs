//! Central module for application-wide configuration settings.
//!
//! Loads the listen port, the admin credential, the JWT signing secret and
//! token lifetimes once at startup. Values that only matter for a single
//! operation (the signing secret, the admin credential) are kept optional so
//! the server still starts and the owning operation reports the gap.

use anyhow::{Context, Result, bail};
use std::env;

/// Upper bound for any token lifetime: ten years.
pub const MAX_TOKEN_LIFETIME_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    /// Declared for the storefront deployment; nothing in this service reads it.
    pub mongo_uri: Option<String>,
    pub frontend_url: Option<String>,
    pub jwt_secret: Option<String>,
    pub jwt_access_expires_in_seconds: u64,
    pub jwt_refresh_expires_in_seconds: u64,
    pub admin_name: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let server_port = get("PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid number")?;

        let jwt_access_expires_in_seconds = get("JWT_ACCESS_EXPIRES_IN_SECONDS")
            .unwrap_or_else(|| "3600".to_string())
            .parse::<u64>()
            .context("JWT_ACCESS_EXPIRES_IN_SECONDS must be a valid number")?;

        let jwt_refresh_expires_in_seconds = get("JWT_REFRESH_EXPIRES_IN_SECONDS")
            .unwrap_or_else(|| "604800".to_string())
            .parse::<u64>()
            .context("JWT_REFRESH_EXPIRES_IN_SECONDS must be a valid number")?;

        if jwt_access_expires_in_seconds == 0 {
            bail!("JWT_ACCESS_EXPIRES_IN_SECONDS must be greater than zero");
        }
        if jwt_refresh_expires_in_seconds > MAX_TOKEN_LIFETIME_SECONDS {
            bail!(
                "JWT_REFRESH_EXPIRES_IN_SECONDS must not exceed {} seconds",
                MAX_TOKEN_LIFETIME_SECONDS
            );
        }
        if jwt_access_expires_in_seconds >= jwt_refresh_expires_in_seconds {
            bail!(
                "access token lifetime ({}s) must be shorter than refresh token lifetime ({}s)",
                jwt_access_expires_in_seconds,
                jwt_refresh_expires_in_seconds
            );
        }

        Ok(Config {
            server_port,
            mongo_uri: get("MONGO_URI"),
            frontend_url: get("FRONTEND_URL"),
            jwt_secret: get("JWT_KEY"),
            jwt_access_expires_in_seconds,
            jwt_refresh_expires_in_seconds,
            admin_name: get("ADMIN_NAME"),
            admin_password: get("ADMIN_PASSWORD"),
        })
    }

    /// Subject placed in tokens issued to the administrator.
    pub fn admin_subject(&self) -> &str {
        self.admin_name.as_deref().unwrap_or("admin")
    }
}
