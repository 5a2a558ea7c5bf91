//! Handlers for the `/operators` roster.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stratbook_core::forms::FieldError;
use stratbook_db::models::operator::CreateOperator;
use stratbook_db::repositories::OperatorRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/operators
///
/// Highest rarity first, then by name.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let operators = OperatorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: operators }))
}

/// POST /api/v1/operators
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOperator>,
) -> AppResult<impl IntoResponse> {
    let mut errors = Vec::new();
    if input.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    if !(1..=6).contains(&input.rarity) {
        errors.push(FieldError::new("rarity", "Rarity must be between 1 and 6"));
    }
    if !errors.is_empty() {
        return Err(AppError::Form(errors));
    }

    let operator = OperatorRepo::create(&state.pool, &input).await?;

    tracing::info!(operator_id = operator.id, "Operator created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: operator })))
}
