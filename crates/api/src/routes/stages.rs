//! Route definitions for stages.
//!
//! Stage creation is mounted under the owning event via
//! [`super::events::router`]; this module covers stage-level operations.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{guides, stages};
use crate::state::AppState;

/// Routes mounted at `/stages`.
///
/// ```text
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// POST   /{id}/move    -> move_stage
/// GET    /{id}/guides  -> list_by_stage (guides)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", put(stages::update).delete(stages::delete))
        .route("/{id}/move", post(stages::move_stage))
        .route("/{id}/guides", get(guides::list_by_stage))
}
