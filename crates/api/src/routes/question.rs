use axum::routing::get;
use axum::Router;

use crate::handlers::question;
use crate::state::AppState;

/// Routes for the `questoes` table.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questoes", get(question::list).post(question::create))
        .route(
            "/questoes/{id}",
            get(question::get_by_id)
                .put(question::update)
                .delete(question::delete),
        )
}
