//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEFAULT_DB_HOST, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD,
    DEFAULT_DB_PORT, DEFAULT_DB_USER, DEFAULT_JWT_EXPIRATION_SECONDS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEV_JWT_SECRET, MAX_JWT_EXPIRATION_SECONDS, MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Application configuration.
///
/// Built once at startup and handed to the services that need it.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    jwt_secret: String,
    pub jwt_expiration_seconds: i64,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_seconds", &self.jwt_expiration_seconds)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns a configuration error if a numeric variable does not parse,
    /// the token lifetime is not positive, or the JWT secret is missing
    /// (release builds) or shorter than [`MIN_JWT_SECRET_LENGTH`].
    pub fn from_vars<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) => secret,
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
            None => {
                return Err(AppError::configuration(
                    "JWT_SECRET environment variable must be set in production",
                ))
            }
        };

        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::configuration(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        let jwt_expiration_seconds =
            parse_or(&lookup, "JWT_EXPIRATION", DEFAULT_JWT_EXPIRATION_SECONDS)?;
        if jwt_expiration_seconds <= 0 || jwt_expiration_seconds > MAX_JWT_EXPIRATION_SECONDS {
            return Err(AppError::configuration(format!(
                "JWT_EXPIRATION must be between 1 and {} seconds",
                MAX_JWT_EXPIRATION_SECONDS
            )));
        }

        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "mysql://{}:{}@{}:{}/{}",
                lookup("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
                lookup("DB_PASSWORD").unwrap_or_else(|| DEFAULT_DB_PASSWORD.to_string()),
                lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
                parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
                lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            ),
        };

        Ok(Self {
            database_url,
            database_max_connections: parse_or(
                &lookup,
                "DB_MAX_CONNECTIONS",
                DEFAULT_DB_MAX_CONNECTIONS,
            )?,
            jwt_secret,
            jwt_expiration_seconds,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_or(&lookup, "SERVER_PORT", DEFAULT_SERVER_PORT)?,
        })
    }

    /// Get the JWT signing secret.
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Parse an optional variable, falling back to `default` when unset.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::configuration(format!("{} has an invalid value: {}", key, raw))),
        None => Ok(default),
    }
}
