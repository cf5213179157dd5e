use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use campus_core::error::CoreError;
use serde_json::json;

/// Body `erro` text for every infrastructure failure.
pub const INTERNAL_ERROR: &str = "Erro interno do servidor";

/// Body `erro` text for rejected payloads.
pub const INVALID_DATA: &str = "Dados inválidos";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for anything
/// the database or the pool reports. Implements [`IntoResponse`] so every
/// handler fails with the same JSON shapes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `campus_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request could not be extracted (body, content type or path).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database error whose 500 body carries an extra user-facing message.
    #[error("Database error ({mensagem}): {source}")]
    DatabaseWithMessage {
        mensagem: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Attach a user-facing message to a database failure.
    pub fn with_message(mensagem: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::DatabaseWithMessage { mensagem, source }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        json!({ "mensagem": not_found_message(entity) }),
                    )
                }
                CoreError::MissingFields { required, missing } => {
                    tracing::debug!(?missing, "Rejected payload with missing fields");
                    (
                        StatusCode::BAD_REQUEST,
                        json!({
                            "erro": INVALID_DATA,
                            "mensagem": missing_fields_message(required),
                        }),
                    )
                }
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    json!({ "erro": INVALID_DATA, "mensagem": msg }),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Rejected request");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "erro": INVALID_DATA, "mensagem": msg }),
                )
            }

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal_error()
            }

            AppError::DatabaseWithMessage { mensagem, source } => {
                tracing::error!(error = %source, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "erro": INTERNAL_ERROR, "mensagem": mensagem }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "erro": INTERNAL_ERROR }),
    )
}

/// `"<Entity> não encontrad(a|o)"`, with the gender the entity name takes.
fn not_found_message(entity: &str) -> String {
    if entity.ends_with('a') || entity.ends_with("ão") {
        format!("{entity} não encontrada")
    } else {
        format!("{entity} não encontrado")
    }
}

fn missing_fields_message(required: &[&str]) -> String {
    format!("Todos os campos ({}) são obrigatórios.", required.join(", "))
}
