use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Root payload: service identity plus the database status.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootResponse {
    pub message: String,
    pub author: String,
    /// `"ok"`, or the text of the error the check hit.
    pub db_status: String,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// Run `SELECT 1` through the shared pool.
async fn check_database(state: &AppState) -> Result<(), sqlx::Error> {
    let pool = state.pool().await?;
    campus_db::health_check(pool).await
}

/// GET / -- always 200. Unlike the resource handlers, a database failure is
/// reported verbatim in `dbStatus`.
async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    tracing::info!(route = "GET /", "Route requested");

    let db_status = match check_database(&state).await {
        Ok(()) => "ok".to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "Database check failed");
            err.to_string()
        }
    };

    Json(RootResponse {
        message: state.config.api_message.clone(),
        author: state.config.api_author.clone(),
        db_status,
    })
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = check_database(&state).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount the root and health check routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
