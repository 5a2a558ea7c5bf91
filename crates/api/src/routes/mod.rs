pub mod events;
pub mod guides;
pub mod health;
pub mod moves;
pub mod operators;
pub mod stages;
pub mod tags;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events/tree                 full taxonomy as a forest (GET)
/// /events                      create event (POST)
/// /events/{id}                 get, update, delete
/// /events/{id}/move            re-parent event (POST)
/// /events/{id}/stages          batch-create stages (POST)
///
/// /stages/{id}                 update, delete
/// /stages/{id}/move            re-home stage (POST)
/// /stages/{id}/guides          guides for a stage (GET)
///
/// /moves/validate              advisory move dry-run (POST)
///
/// /guides                      submit guide (POST)
/// /guides/{id}                 delete guide (DELETE)
///
/// /operators                   list, seed (GET, POST)
///
/// /tags                        list tags (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Event tree and per-event stage batches.
        .nest("/events", events::router())
        // Stage-level operations.
        .nest("/stages", stages::router())
        // Server-side move validation (advisory dry-run).
        .nest("/moves", moves::router())
        // Guide submissions.
        .nest("/guides", guides::router())
        // Operator roster.
        .nest("/operators", operators::router())
        // Tags attached to guides.
        .nest("/tags", tags::router())
}
