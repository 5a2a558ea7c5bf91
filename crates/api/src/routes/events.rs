//! Route definitions for the event taxonomy.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{events, stages};
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /tree         -> list_tree
/// POST   /             -> create
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// POST   /{id}/move    -> move_event
/// POST   /{id}/stages  -> create_batch (stages)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tree", get(events::list_tree))
        .route("/", post(events::create))
        .route(
            "/{id}",
            get(events::get_by_id)
                .put(events::update)
                .delete(events::delete),
        )
        .route("/{id}/move", post(events::move_event))
        .route("/{id}/stages", post(stages::create_batch))
}
