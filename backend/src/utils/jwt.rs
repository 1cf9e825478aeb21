//! JWT token utilities for authentication and authorization.
//!
//! Issues the access/refresh token pair handed out on login and validates
//! bearer tokens on protected routes. Tokens are stateless: signature and
//! embedded expiry are the only validity checks, there is no revocation list.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::{ServiceError, ServiceResult};

/// Kind of token, embedded in the claims so one cannot stand in for the other.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Access => write!(f, "access"),
            TokenType::Refresh => write!(f, "refresh"),
        }
    }
}

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject identity
    pub sub: String,
    /// Role granted to the subject
    pub role: String,
    pub token_type: TokenType,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
    /// Unique token id
    pub jti: String,
}

/// JWT token utility for creating and validating tokens
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_expires_in: u64,
    refresh_expires_in: u64,
}

impl JwtUtils {
    /// Create a new JwtUtils instance from the loaded configuration.
    ///
    /// Fails with a configuration error when no signing secret is set.
    pub fn new(config: &Config) -> ServiceResult<Self> {
        let secret = config
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ServiceError::configuration("JWT secret not found in env"))?;

        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Ok(JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            access_expires_in: config.jwt_access_expires_in_seconds,
            refresh_expires_in: config.jwt_refresh_expires_in_seconds,
        })
    }

    /// Lifetime of an access token, in seconds.
    pub fn access_expires_in(&self) -> u64 {
        self.access_expires_in
    }

    /// Lifetime of a refresh token, in seconds.
    pub fn refresh_expires_in(&self) -> u64 {
        self.refresh_expires_in
    }

    /// Generate a short-lived access token
    pub fn generate_access_token(&self, subject: &str, role: &str) -> ServiceResult<String> {
        self.sign(subject, role, TokenType::Access, self.access_expires_in)
    }

    /// Generate a refresh token (longer expiration)
    pub fn generate_refresh_token(&self, subject: &str, role: &str) -> ServiceResult<String> {
        self.sign(subject, role, TokenType::Refresh, self.refresh_expires_in)
    }

    /// Validate and decode a JWT token, requiring it to be of the `expected` kind.
    pub fn validate_token(&self, token: &str, expected: TokenType) -> ServiceResult<Claims> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| ServiceError::unauthorized(format!("Token validation failed: {}", e)))?;

        if claims.token_type != expected {
            return Err(ServiceError::unauthorized(format!(
                "Expected {} token, got {} token",
                expected, claims.token_type
            )));
        }

        Ok(claims)
    }

    fn sign(
        &self,
        subject: &str,
        role: &str,
        token_type: TokenType,
        expires_in: u64,
    ) -> ServiceResult<String> {
        let now = Utc::now();
        let exp = i64::try_from(expires_in)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                ServiceError::configuration(format!(
                    "{} token lifetime of {}s is out of range",
                    token_type, expires_in
                ))
            })?;

        let claims = Claims {
            sub: subject.to_string(),
            role: role.to_string(),
            token_type,
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
            jti: Uuid::now_v7().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            ServiceError::internal_error(format!("{} token generation failed: {}", token_type, e))
        })
    }
}

impl Claims {
    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: Option<&str>) -> Config {
        Config {
            server_port: 5000,
            mongo_uri: None,
            frontend_url: None,
            jwt_secret: secret.map(str::to_string),
            jwt_access_expires_in_seconds: 900,
            jwt_refresh_expires_in_seconds: 86400,
            admin_name: Some("admin".to_string()),
            admin_password: Some("pw".to_string()),
        }
    }

    #[test]
    fn test_missing_secret_is_configuration_error() {
        match JwtUtils::new(&config(None)) {
            Err(ServiceError::Configuration { message }) => {
                assert_eq!(message, "JWT secret not found in env")
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected configuration error"),
        }
    }

    #[test]
    fn test_access_and_refresh_tokens_carry_identity() {
        let jwt = JwtUtils::new(&config(Some("test-secret"))).unwrap();

        let access = jwt.generate_access_token("admin", "admin").unwrap();
        let refresh = jwt.generate_refresh_token("admin", "admin").unwrap();
        assert_ne!(access, refresh);

        let access_claims = jwt.validate_token(&access, TokenType::Access).unwrap();
        let refresh_claims = jwt.validate_token(&refresh, TokenType::Refresh).unwrap();

        assert_eq!(access_claims.subject(), "admin");
        assert_eq!(access_claims.role(), "admin");
        assert_eq!(refresh_claims.role(), "admin");
        assert!(access_claims.exp < refresh_claims.exp);
        assert_eq!(access_claims.exp - access_claims.iat, 900);
        assert_eq!(refresh_claims.exp - refresh_claims.iat, 86400);
        assert_ne!(access_claims.jti, refresh_claims.jti);
    }

    #[test]
    fn test_out_of_range_lifetime_is_configuration_error() {
        let mut config = config(Some("test-secret"));
        config.jwt_refresh_expires_in_seconds = 100_000_000_000_000_000;
        let jwt = JwtUtils::new(&config).unwrap();

        assert!(jwt.generate_access_token("admin", "admin").is_ok());
        let err = jwt.generate_refresh_token("admin", "admin").unwrap_err();
        assert!(matches!(err, ServiceError::Configuration { .. }));

        config.jwt_refresh_expires_in_seconds = u64::MAX;
        let jwt = JwtUtils::new(&config).unwrap();
        let err = jwt.generate_refresh_token("admin", "admin").unwrap_err();
        assert!(matches!(err, ServiceError::Configuration { .. }));
    }

    #[test]
    fn test_token_kind_is_enforced() {
        let jwt = JwtUtils::new(&config(Some("test-secret"))).unwrap();
        let refresh = jwt.generate_refresh_token("admin", "admin").unwrap();

        let err = jwt.validate_token(&refresh, TokenType::Access).unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized { .. }));
    }

    #[test]
    fn test_rejects_token_signed_with_other_secret() {
        let issuer = JwtUtils::new(&config(Some("one-secret"))).unwrap();
        let verifier = JwtUtils::new(&config(Some("another-secret"))).unwrap();
        let token = issuer.generate_access_token("admin", "admin").unwrap();

        assert!(verifier.validate_token(&token, TokenType::Access).is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        let jwt = JwtUtils::new(&config(Some("test-secret"))).unwrap();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "admin".to_string(),
            role: "admin".to_string(),
            token_type: TokenType::Access,
            exp: now - 3600,
            iat: now - 7200,
            jti: Uuid::now_v7().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(jwt.validate_token(&token, TokenType::Access).is_err());
    }
}
