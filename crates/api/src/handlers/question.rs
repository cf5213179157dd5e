//! Handlers for the `/questoes` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::question::{CreateQuestion, Question, UpdateQuestion};
use campus_db::repositories::QuestionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidJson, ValidPath};
use crate::response::{Created, Mensagem};
use crate::state::AppState;

const ENTITY: &str = "Questão";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// GET /questoes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Question>>> {
    tracing::info!(route = "GET /questoes", "Route requested");

    let on_error = || AppError::with_message("Não foi possível buscar as questões");
    let pool = state.pool().await.map_err(on_error())?;
    let questions = QuestionRepo::list(pool).await.map_err(on_error())?;
    Ok(Json(questions))
}

/// POST /questoes
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateQuestion>,
) -> AppResult<(StatusCode, Json<Created>)> {
    tracing::info!(route = "POST /questoes", "Route requested");

    let fields = input.validate()?;
    let pool = state.pool().await?;
    let id = QuestionRepo::create(pool, &fields).await?;
    tracing::info!(id, "Question created");

    Ok((
        StatusCode::CREATED,
        Json(Created {
            mensagem: "Questão criada com sucesso!",
            id,
        }),
    ))
}

/// GET /questoes/{id}
///
/// Answers with a one-element array.
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Vec<Question>>> {
    tracing::info!(route = "GET /questoes/{id}", id, "Route requested");

    let pool = state.pool().await?;
    let question = QuestionRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(vec![question]))
}

/// PUT /questoes/{id}
///
/// Reads the stored row, lays the body over it and rewrites every column.
/// The read and the write are separate statements.
pub async fn update(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidJson(input): ValidJson<UpdateQuestion>,
) -> AppResult<Json<Mensagem>> {
    tracing::info!(route = "PUT /questoes/{id}", id, "Route requested");

    let pool = state.pool().await?;
    let current = QuestionRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let fields = input.merge(&current);
    if !QuestionRepo::update(pool, id, &fields).await? {
        // Deleted between the read and the write.
        return Err(not_found(id));
    }

    Ok(Json(Mensagem::new("Questão atualizada com sucesso!")))
}

/// DELETE /questoes/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Mensagem>> {
    tracing::info!(route = "DELETE /questoes/{id}", id, "Route requested");

    let pool = state.pool().await?;
    if QuestionRepo::delete(pool, id).await? {
        Ok(Json(Mensagem::new("Questão excluida com sucesso!!")))
    } else {
        Err(not_found(id))
    }
}
