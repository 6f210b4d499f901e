//! Application configuration loaded from the environment.
//!
//! Settings are plain values constructed once at startup and passed in
//! explicitly; there is no process-wide configuration state.

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Filter directive for the tracing subscriber.
    pub log_level: String,
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `DATABASE_URL` is not set.
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    /// `BIND_ADDR` does not parse as a socket address.
    #[error("invalid BIND_ADDR '{value}': {source}")]
    InvalidBindAddr {
        /// The rejected value.
        value: String,
        /// Underlying parse failure.
        source: std::net::AddrParseError,
    },
}

impl Config {
    /// Loads configuration from `DATABASE_URL`, `BIND_ADDR`, and
    /// `LOG_LEVEL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `DATABASE_URL` is absent or `BIND_ADDR`
    /// is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            env::var("DATABASE_URL").ok(),
            env::var("BIND_ADDR").ok(),
            env::var("LOG_LEVEL").ok(),
        )
    }

    fn from_parts(
        database_url: Option<String>,
        bind_addr: Option<String>,
        log_level: Option<String>,
    ) -> Result<Self, ConfigError> {
        let raw_url = database_url.ok_or(ConfigError::MissingDatabaseUrl)?;
        let raw_addr = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let parsed_addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                source,
            })?;

        Ok(Self {
            database_url: normalize_database_url(&raw_url),
            bind_addr: parsed_addr,
            log_level: log_level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned()),
        })
    }
}

/// Rewrites Heroku-style `postgres://` URLs to the `postgresql://` scheme.
fn normalize_database_url(raw: &str) -> String {
    raw.strip_prefix("postgres://")
        .map_or_else(|| raw.to_owned(), |rest| format!("postgresql://{rest}"))
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_heroku_style_urls() {
        assert_eq!(
            normalize_database_url("postgres://user:pw@host/db"),
            "postgresql://user:pw@host/db"
        );
    }

    #[test]
    fn leaves_canonical_urls_untouched() {
        assert_eq!(
            normalize_database_url("postgresql://user:pw@host/db"),
            "postgresql://user:pw@host/db"
        );
    }

    #[test]
    fn from_parts_requires_database_url() {
        let result = Config::from_parts(None, None, None);
        assert!(matches!(result, Err(ConfigError::MissingDatabaseUrl)));
    }

    #[test]
    fn from_parts_applies_defaults() {
        let config = Config::from_parts(Some("postgresql://localhost/todo".to_owned()), None, None)
            .expect("config should load");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn from_parts_rejects_malformed_bind_addr() {
        let result = Config::from_parts(
            Some("postgresql://localhost/todo".to_owned()),
            Some("not-an-address".to_owned()),
            None,
        );
        assert!(matches!(result, Err(ConfigError::InvalidBindAddr { .. })));
    }
}
