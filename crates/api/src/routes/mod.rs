pub mod health;
pub mod lost_item;
pub mod question;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /questoes           list, create
/// /questoes/{id}      get, update, delete
///
/// /objetos            list, create
/// /objetos/{id}       get, update, delete
/// ```
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .merge(question::router())
        .merge(lost_item::router())
}
