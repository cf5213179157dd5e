//! Process-wide, lazily created connection pool.
//!
//! The pool is built on the first [`PoolProvider::get`] call and reused for
//! the rest of the process. Construction goes through
//! [`PgPoolOptions::connect_lazy`], so acquiring the pool never touches the
//! network; connection problems surface when a statement runs.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tokio::sync::OnceCell;

use crate::DbPool;

/// Environment variables consulted for the connection string, in order.
pub const DATABASE_URL_VARS: [&str; 2] = ["URL_BD", "DATABASE_URL"];

/// Default upper bound on physical connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default time a statement waits for a free (or new) connection.
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Sizing and timing of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("database connection string is not set (expected one of: URL_BD, DATABASE_URL)")]
pub struct MissingDatabaseUrl;

#[derive(Debug)]
enum UrlSource {
    Env,
    Fixed(String),
}

/// Hands out the shared pool, creating it exactly once.
///
/// Concurrent first callers wait on the same initialisation. A failed
/// initialisation is not cached, so the next call tries again.
#[derive(Debug)]
pub struct PoolProvider {
    source: UrlSource,
    settings: PoolSettings,
    cell: OnceCell<DbPool>,
}

impl PoolProvider {
    /// Provider that reads the connection string from the environment on
    /// first use.
    pub fn from_env(settings: PoolSettings) -> Self {
        Self {
            source: UrlSource::Env,
            settings,
            cell: OnceCell::new(),
        }
    }

    /// Provider with an explicit connection string.
    pub fn with_url(url: impl Into<String>, settings: PoolSettings) -> Self {
        Self {
            source: UrlSource::Fixed(url.into()),
            settings,
            cell: OnceCell::new(),
        }
    }

    /// Provider around an already built pool.
    pub fn from_pool(pool: DbPool) -> Self {
        Self {
            source: UrlSource::Env,
            settings: PoolSettings::default(),
            cell: OnceCell::new_with(Some(pool)),
        }
    }

    /// Return the shared pool, building it on first use.
    pub async fn get(&self) -> Result<&DbPool, sqlx::Error> {
        self.cell
            .get_or_try_init(|| async {
                let url = match &self.source {
                    UrlSource::Fixed(url) => url.clone(),
                    UrlSource::Env => database_url_from(|key| std::env::var(key).ok())
                        .ok_or_else(|| sqlx::Error::Configuration(Box::new(MissingDatabaseUrl)))?,
                };

                let pool = PgPoolOptions::new()
                    .max_connections(self.settings.max_connections)
                    .acquire_timeout(self.settings.acquire_timeout)
                    .connect_lazy(&url)?;
                tracing::debug!(
                    max_connections = self.settings.max_connections,
                    "Database connection pool created"
                );
                Ok::<_, sqlx::Error>(pool)
            })
            .await
    }

    /// The pool if it has been created, without creating it.
    pub fn initialized(&self) -> Option<&DbPool> {
        self.cell.get()
    }
}

/// Resolve the connection string using `lookup` over [`DATABASE_URL_VARS`].
///
/// Empty values are skipped.
pub fn database_url_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    DATABASE_URL_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.trim().is_empty())
}
