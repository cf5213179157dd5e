use std::sync::Arc;

use campus_db::{DbPool, PoolProvider};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Lazily created database pool, shared by every request.
    pub db: Arc<PoolProvider>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(db: PoolProvider, config: ServerConfig) -> Self {
        Self {
            db: Arc::new(db),
            config: Arc::new(config),
        }
    }

    /// The shared pool, created on first use.
    pub async fn pool(&self) -> Result<&DbPool, sqlx::Error> {
        self.db.get().await
    }
}
