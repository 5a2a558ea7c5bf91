//! Handlers for the `/stages` resource.
//!
//! Stages are the leaf layer of the taxonomy and the only rows guides
//! attach to. They are created in batches under one event; a single
//! stage is just a batch of one.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stratbook_core::editor::{pending_stage_error, PendingStage};
use stratbook_core::error::CoreError;
use stratbook_core::forms::FieldError;
use stratbook_core::moves::{validate_move, MoveCheck, MoveSubject};
use stratbook_core::types::DbId;
use stratbook_db::models::stage::{CreateStages, MoveStage, Stage, UpdateStage};
use stratbook_db::repositories::StageRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::events::resolve_destination;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a stage exists, returning the full row.
pub async fn ensure_stage_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Stage> {
    StageRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Stage", id }))
}

/// Check a whole batch with the same rules the editor applies entry by
/// entry, reporting every offending entry at once.
fn validate_batch(input: &CreateStages) -> Result<Vec<PendingStage>, Vec<FieldError>> {
    let mut accepted = Vec::with_capacity(input.stages.len());
    let mut errors = Vec::new();
    for (index, stage) in input.stages.iter().enumerate() {
        match pending_stage_error(&accepted, &stage.name, stage.code.as_deref()) {
            Some(error) => errors.push(FieldError::new(
                format!("stages[{index}].{}", error.field),
                error.message,
            )),
            None => accepted.push(PendingStage::new(&stage.name, stage.code.as_deref())),
        }
    }
    if errors.is_empty() {
        Ok(accepted)
    } else {
        Err(errors)
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/events/{id}/stages
///
/// Creates a batch of stages under one event, all or nothing. An event
/// that already groups child events refuses stages.
pub async fn create_batch(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
    Json(input): Json<CreateStages>,
) -> AppResult<impl IntoResponse> {
    let batch = validate_batch(&input).map_err(AppError::Form)?;

    let destination = resolve_destination(&state.pool, Some(event_id)).await?;
    if destination.has_child_events {
        let title = destination.name.as_deref().unwrap_or("Root");
        return Err(AppError::BadRequest(format!(
            "{title} already has child event"
        )));
    }

    let stages = StageRepo::create_batch(&state.pool, event_id, &batch).await?;

    tracing::info!(
        event_id = event_id,
        created = stages.len(),
        "Stage batch created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: stages })))
}

/// PUT /api/v1/stages/{id}
///
/// A blank code is treated as absent; omitted fields keep their current
/// values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStage>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Form(vec![FieldError::new(
                "name",
                "Name is required",
            )]));
        }
    }
    let input = UpdateStage {
        name: input.name,
        code: input
            .code
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty()),
    };

    let stage = StageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Stage",
            id,
        }))?;

    tracing::info!(stage_id = stage.id, "Stage updated");
    Ok(Json(DataResponse { data: stage }))
}

/// POST /api/v1/stages/{id}/move
///
/// Stages can sit under an event without child events, or at the root.
pub async fn move_stage(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveStage>,
) -> AppResult<impl IntoResponse> {
    let stage = ensure_stage_exists(&state.pool, id).await?;
    let destination = resolve_destination(&state.pool, input.new_event_id).await?;

    let subject = MoveSubject::Stage {
        id,
        event_id: stage.event_id,
    };
    if let MoveCheck::Rejected { reason } = validate_move(subject, &destination) {
        return Err(AppError::BadRequest(reason));
    }

    let moved = StageRepo::move_to(&state.pool, id, input.new_event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Stage",
            id,
        }))?;

    tracing::info!(
        stage_id = id,
        new_event_id = ?input.new_event_id,
        "Stage moved"
    );

    Ok(Json(DataResponse { data: moved }))
}

/// DELETE /api/v1/stages/{id}
///
/// Guides on the stage cascade away with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = StageRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(stage_id = id, "Stage deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Stage",
            id,
        }))
    }
}
