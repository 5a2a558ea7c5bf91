//! Handler for dry-run move validation.
//!
//! The tree editor calls this while the admin browses destinations, so
//! both verdicts come back as 200 with the reason in the body.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use stratbook_core::editor::EntityKind;
use stratbook_core::moves::{validate_move, MoveSubject};
use stratbook_core::types::DbId;

use crate::error::AppResult;
use crate::handlers::events::{ensure_event_exists, resolve_destination};
use crate::handlers::stages::ensure_stage_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for POST /moves/validate.
#[derive(Debug, Deserialize)]
pub struct ValidateMoveRequest {
    pub kind: EntityKind,
    pub id: DbId,
    pub destination_id: Option<DbId>,
}

/// POST /api/v1/moves/validate
///
/// Dry-runs the placement rules without touching any row.
pub async fn validate(
    State(state): State<AppState>,
    Json(input): Json<ValidateMoveRequest>,
) -> AppResult<impl IntoResponse> {
    let subject = match input.kind {
        EntityKind::Event => {
            let event = ensure_event_exists(&state.pool, input.id).await?;
            MoveSubject::Event {
                id: event.id,
                parent_id: event.parent_event_id,
            }
        }
        EntityKind::Stage => {
            let stage = ensure_stage_exists(&state.pool, input.id).await?;
            MoveSubject::Stage {
                id: stage.id,
                event_id: stage.event_id,
            }
        }
    };
    let destination = resolve_destination(&state.pool, input.destination_id).await?;

    let check = validate_move(subject, &destination);
    Ok(Json(DataResponse { data: check }))
}
