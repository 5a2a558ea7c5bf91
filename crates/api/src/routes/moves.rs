//! Route definitions for move validation.

use axum::routing::post;
use axum::Router;

use crate::handlers::moves;
use crate::state::AppState;

/// Routes mounted at `/moves`.
///
/// ```text
/// POST /validate  -> validate (advisory dry-run, always 200 when well-formed)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/validate", post(moves::validate))
}
