//! Stage entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stratbook_core::types::{DbId, Timestamp};

/// A row from the `stages` table.
///
/// `event_id` is `NULL` for stages parked at the root of the taxonomy.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Stage {
    pub id: DbId,
    pub event_id: Option<DbId>,
    pub name: String,
    pub code: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One stage of a batch-create request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStage {
    pub name: String,
    pub code: Option<String>,
}

/// Request body for `POST /events/{id}/stages`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStages {
    pub stages: Vec<CreateStage>,
}

/// DTO for updating a stage.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStage {
    pub name: Option<String>,
    pub code: Option<String>,
}

/// Request body for moving a stage to a new event (`None` = root).
#[derive(Debug, Clone, Deserialize)]
pub struct MoveStage {
    pub new_event_id: Option<DbId>,
}
