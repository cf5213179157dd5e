//! Handlers for the `/objetos` resource (table `objeto`).
//!
//! `palavraPasse` is stored and returned but no handler checks it.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::lost_item::{CreateLostItem, LostItem, UpdateLostItem};
use campus_db::repositories::LostItemRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ValidJson, ValidPath};
use crate::response::{Created, Mensagem};
use crate::state::AppState;

const ENTITY: &str = "Objeto";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// GET /objetos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LostItem>>> {
    tracing::info!(route = "GET /objetos", "Route requested");

    let pool = state.pool().await?;
    let items = LostItemRepo::list(pool).await?;
    Ok(Json(items))
}

/// POST /objetos
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateLostItem>,
) -> AppResult<(StatusCode, Json<Created>)> {
    tracing::info!(route = "POST /objetos", "Route requested");

    let fields = input.validate()?;
    let pool = state.pool().await?;
    let id = LostItemRepo::create(pool, &fields).await?;
    tracing::info!(id, "Lost item created");

    Ok((
        StatusCode::CREATED,
        Json(Created {
            mensagem: "Objeto criado com sucesso!",
            id,
        }),
    ))
}

/// GET /objetos/{id}
///
/// Answers with a one-element array.
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Vec<LostItem>>> {
    tracing::info!(route = "GET /objetos/{id}", id, "Route requested");

    let pool = state.pool().await?;
    let item = LostItemRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(vec![item]))
}

/// PUT /objetos/{id}
///
/// Same read-merge-write shape as questions, with per-column merge rules
/// defined on [`UpdateLostItem`].
pub async fn update(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidJson(input): ValidJson<UpdateLostItem>,
) -> AppResult<Json<Mensagem>> {
    tracing::info!(route = "PUT /objetos/{id}", id, "Route requested");

    let pool = state.pool().await?;
    let current = LostItemRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let fields = input.merge(&current)?;
    if !LostItemRepo::update(pool, id, &fields).await? {
        return Err(not_found(id));
    }

    Ok(Json(Mensagem::new("Objeto atualizado com sucesso!")))
}

/// DELETE /objetos/{id}
pub async fn delete(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<Mensagem>> {
    tracing::info!(route = "DELETE /objetos/{id}", id, "Route requested");

    let pool = state.pool().await?;
    if LostItemRepo::delete(pool, id).await? {
        Ok(Json(Mensagem::new("Objeto excluido com sucesso!!")))
    } else {
        Err(not_found(id))
    }
}
