//! Handlers for the `/guides` resource.
//!
//! Guides are YouTube submissions pinned to a stage, listed with their
//! operator lineup and tags.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stratbook_core::error::CoreError;
use stratbook_core::forms::validate_guide_form;
use stratbook_core::types::DbId;
use stratbook_db::models::guide::{CreateGuide, GuideDetails};
use stratbook_db::repositories::{GuideRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::stages::ensure_stage_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/stages/{id}/guides
///
/// Newest first, each with its operator lineup and tags.
pub async fn list_by_stage(
    State(state): State<AppState>,
    Path(stage_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_stage_exists(&state.pool, stage_id).await?;

    let guides = GuideRepo::list_by_stage(&state.pool, stage_id).await?;
    let mut details = Vec::with_capacity(guides.len());
    for guide in guides {
        let operators = GuideRepo::operators_for(&state.pool, guide.id).await?;
        let tags = GuideRepo::tags_for(&state.pool, guide.id).await?;
        details.push(GuideDetails {
            guide,
            operators,
            tags,
        });
    }

    Ok(Json(DataResponse { data: details }))
}

/// POST /api/v1/guides
///
/// The form is validated before any lookup. Tag names are normalized and
/// created on first use; the guide row and its links land atomically.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGuide>,
) -> AppResult<impl IntoResponse> {
    validate_guide_form(&input.title, &input.video_id).map_err(AppError::Form)?;

    ensure_stage_exists(&state.pool, input.stage_id).await?;

    let mut tag_ids = Vec::with_capacity(input.tags.len());
    for name in &input.tags {
        if name.trim().is_empty() {
            continue;
        }
        let tag = TagRepo::create_or_get(&state.pool, name).await?;
        tag_ids.push(tag.id);
    }

    let guide = GuideRepo::create(&state.pool, &input, &tag_ids).await?;

    tracing::info!(
        guide_id = guide.id,
        stage_id = guide.stage_id,
        video_id = %guide.video_id,
        "Guide created"
    );

    let operators = GuideRepo::operators_for(&state.pool, guide.id).await?;
    let tags = GuideRepo::tags_for(&state.pool, guide.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: GuideDetails {
                guide,
                operators,
                tags,
            },
        }),
    ))
}

/// DELETE /api/v1/guides/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = GuideRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(guide_id = id, "Guide deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Guide",
            id,
        }))
    }
}
