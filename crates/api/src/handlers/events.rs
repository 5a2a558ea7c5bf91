//! Handlers for the `/events` resource.
//!
//! Events form the upper layers of the guide taxonomy: an event either
//! groups child events or holds stages, never both. The placement rules
//! are enforced here on create and move.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use stratbook_core::error::CoreError;
use stratbook_core::forms::{validate_event_dates, validate_event_form, EventDates, FieldError};
use stratbook_core::moves::{validate_move, DestinationInfo, MoveCheck, MoveSubject};
use stratbook_core::tree::{build_forest, TreeNode};
use stratbook_core::types::DbId;
use stratbook_db::models::event::{CreateEvent, Event, EventWithStages, MoveEvent, UpdateEvent};
use stratbook_db::models::stage::Stage;
use stratbook_db::repositories::{EventRepo, StageRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// The whole taxonomy in one payload: the event forest plus any stages
/// parked at the root.
#[derive(Debug, Serialize)]
pub struct TaxonomyTree {
    pub events: Vec<TreeNode<EventWithStages>>,
    pub root_stages: Vec<Stage>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that an event exists, returning the full row.
pub async fn ensure_event_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Event> {
    EventRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Event", id }))
}

/// Describe a destination for the placement rules: an event by ID, or the
/// root container when `destination` is `None`. Missing events are a 404.
pub async fn resolve_destination(
    pool: &sqlx::PgPool,
    destination: Option<DbId>,
) -> AppResult<DestinationInfo> {
    match destination {
        Some(id) => EventRepo::destination_info(pool, id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Event", id })),
        None => Ok(EventRepo::root_info(pool).await?),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/events/tree
///
/// Events whose parent row cannot be reached are left out of the payload
/// and logged; everything else nests under its parent.
pub async fn list_tree(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list(&state.pool).await?;
    let stages = StageRepo::list_all(&state.pool).await?;

    let mut stages_by_event: HashMap<DbId, Vec<Stage>> = HashMap::new();
    let mut root_stages = Vec::new();
    for stage in stages {
        match stage.event_id {
            Some(event_id) => stages_by_event.entry(event_id).or_default().push(stage),
            None => root_stages.push(stage),
        }
    }

    let items: Vec<EventWithStages> = events
        .into_iter()
        .map(|event| {
            let stages = stages_by_event.remove(&event.id).unwrap_or_default();
            EventWithStages { event, stages }
        })
        .collect();

    let forest = build_forest(items);
    if !forest.orphans.is_empty() {
        tracing::warn!(
            orphans = ?forest.orphans,
            "Tree payload omits events with unreachable parents"
        );
    }

    Ok(Json(DataResponse {
        data: TaxonomyTree {
            events: forest.roots,
            root_stages,
        },
    }))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = ensure_event_exists(&state.pool, id).await?;
    let stages = StageRepo::list_by_event(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: EventWithStages { event, stages },
    }))
}

/// POST /api/v1/events
///
/// The form is validated before any lookup; a destination that already
/// holds stages refuses child events.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    let dates = validate_event_form(
        &input.name,
        input.has_duration,
        &input.start_date,
        &input.end_date,
    )
    .map_err(AppError::Form)?;

    let destination = resolve_destination(&state.pool, input.parent_event_id).await?;
    if destination.has_stages {
        let title = destination.name.as_deref().unwrap_or("Root");
        return Err(AppError::BadRequest(format!("{title} already has stage")));
    }

    let event = EventRepo::create(&state.pool, &input, dates).await?;

    tracing::info!(
        event_id = event.id,
        parent_event_id = ?event.parent_event_id,
        "Event created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// PUT /api/v1/events/{id}
///
/// `has_duration: false` clears both dates; `true` requires a valid
/// range. Omitted fields keep their current values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<impl IntoResponse> {
    let mut errors = Vec::new();
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }
    }
    let dates = match input.has_duration {
        None => None,
        Some(false) => Some(EventDates::default()),
        Some(true) => match validate_event_dates(&input.start_date, &input.end_date) {
            Ok(range) => Some(range),
            Err(mut date_errors) => {
                errors.append(&mut date_errors);
                None
            }
        },
    };
    if !errors.is_empty() {
        return Err(AppError::Form(errors));
    }

    let event = EventRepo::update(&state.pool, id, &input, dates)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;

    tracing::info!(event_id = event.id, "Event updated");
    Ok(Json(DataResponse { data: event }))
}

/// POST /api/v1/events/{id}/move
///
/// The placement rules run server-side regardless of what the client
/// already checked.
pub async fn move_event(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveEvent>,
) -> AppResult<impl IntoResponse> {
    let event = ensure_event_exists(&state.pool, id).await?;
    let destination = resolve_destination(&state.pool, input.new_parent_id).await?;

    let subject = MoveSubject::Event {
        id,
        parent_id: event.parent_event_id,
    };
    if let MoveCheck::Rejected { reason } = validate_move(subject, &destination) {
        return Err(AppError::BadRequest(reason));
    }

    let moved = EventRepo::move_to(&state.pool, id, input.new_parent_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;

    tracing::info!(
        event_id = id,
        new_parent_id = ?input.new_parent_id,
        "Event moved"
    );

    Ok(Json(DataResponse { data: moved }))
}

/// DELETE /api/v1/events/{id}
///
/// Child events, stages and their guides cascade away with the event.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = EventRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(event_id = id, "Event deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))
    }
}
