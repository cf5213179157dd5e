//! Database access for the `questoes` and `objeto` tables.
//!
//! The schema itself is owned outside this service; only DML is issued here.

pub mod models;
pub mod provider;
pub mod repositories;

pub use provider::{PoolProvider, PoolSettings};

pub type DbPool = sqlx::PgPool;

/// Run a trivial round trip to confirm the database answers.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
