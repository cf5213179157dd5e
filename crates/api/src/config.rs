use std::time::Duration;

use campus_db::provider::{DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS};
use campus_db::PoolSettings;

/// Default text of the `message` field on `GET /`.
pub const DEFAULT_API_MESSAGE: &str = "API para questões e achados e perdidos";

/// Default text of the `author` field on `GET /`.
pub const DEFAULT_API_AUTHOR: &str = "Mizael Miranda Barbosa";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. The database
/// connection string is not part of it: the pool provider reads that itself
/// on first use.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// Seconds a statement waits for a database connection (default: `30`).
    pub db_acquire_timeout_secs: u64,
    /// `message` reported by `GET /`.
    pub api_message: String,
    /// `author` reported by `GET /`.
    pub api_author: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `3000`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `DB_MAX_CONNECTIONS`      | `10`                    |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`                    |
    /// | `API_MESSAGE`             | [`DEFAULT_API_MESSAGE`] |
    /// | `API_AUTHOR`              | [`DEFAULT_API_AUTHOR`]  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_or(&lookup, "PORT", "u16", 3000u16)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", "u64", 30u64)?;
        let db_max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", "u32", DEFAULT_MAX_CONNECTIONS)?;
        let db_acquire_timeout_secs = parse_or(
            &lookup,
            "DB_ACQUIRE_TIMEOUT_SECS",
            "u64",
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?;

        let api_message = lookup("API_MESSAGE").unwrap_or_else(|| DEFAULT_API_MESSAGE.into());
        let api_author = lookup("API_AUTHOR").unwrap_or_else(|| DEFAULT_API_AUTHOR.into());

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            db_acquire_timeout_secs,
            api_message,
            api_author,
        })
    }

    /// Pool sizing derived from the `DB_*` settings.
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_acquire_timeout_secs),
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}
