//! Route definitions for guide submissions.
//!
//! Per-stage guide listing is mounted under `/stages/{id}/guides` via
//! [`super::stages::router`].

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::guides;
use crate::state::AppState;

/// Routes mounted at `/guides`.
///
/// ```text
/// POST   /      -> create
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(guides::create))
        .route("/{id}", delete(guides::delete))
}
