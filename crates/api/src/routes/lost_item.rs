use axum::routing::get;
use axum::Router;

use crate::handlers::lost_item;
use crate::state::AppState;

/// Routes for the `objeto` table, exposed as `/objetos`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/objetos", get(lost_item::list).post(lost_item::create))
        .route(
            "/objetos/{id}",
            get(lost_item::get_by_id)
                .put(lost_item::update)
                .delete(lost_item::delete),
        )
}
