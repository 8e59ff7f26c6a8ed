//! Token issuer - Signs time-bounded identity tokens.
//!
//! Tokens are HS256 JWTs. Claim names are fixed for downstream verifiers:
//! `userId` carries the user id as a decimal string and `expiredAt` the
//! expiry in Unix seconds.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "expiredAt")]
    pub expired_at: i64,
    pub iat: i64,
}

/// A freshly signed token and the facts it asserts.
#[derive(Clone)]
pub struct IssuedToken {
    pub token: String,
    pub subject: i64,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedToken")
            .field("token", &"[REDACTED]")
            .field("subject", &self.subject)
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Issues signed tokens with a fixed secret and lifetime.
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    secret_is_empty: bool,
    ttl_seconds: i64,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
            secret_is_empty: secret.is_empty(),
            ttl_seconds,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.jwt_secret(), config.jwt_expiration_seconds)
    }

    /// Issue a token for `user_id`, valid from now.
    pub fn issue(&self, user_id: i64) -> AppResult<IssuedToken> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token for `user_id` as of `now`.
    ///
    /// # Errors
    /// Returns a configuration error if the secret is empty, the lifetime is
    /// not positive or overflows the clock, or signing fails.
    pub fn issue_at(&self, user_id: i64, now: DateTime<Utc>) -> AppResult<IssuedToken> {
        if self.secret_is_empty {
            return Err(AppError::configuration("JWT secret is empty"));
        }
        if self.ttl_seconds <= 0 {
            return Err(AppError::configuration(format!(
                "JWT lifetime must be positive, got {}",
                self.ttl_seconds
            )));
        }

        let expires_at = Duration::try_seconds(self.ttl_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "JWT lifetime of {} seconds is out of range",
                    self.ttl_seconds
                ))
            })?;
        let claims = Claims {
            user_id: user_id.to_string(),
            expired_at: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.key)
            .map_err(|e| AppError::configuration(format!("Token signing failed: {}", e)))?;

        Ok(IssuedToken {
            token,
            subject: user_id,
            issued_at: now,
            expires_at,
        })
    }
}
