//! Route definitions for the operator roster.

use axum::routing::get;
use axum::Router;

use crate::handlers::operators;
use crate::state::AppState;

/// Routes mounted at `/operators`.
///
/// ```text
/// GET  /  -> list
/// POST /  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(operators::list).post(operators::create))
}
