//! Event entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stratbook_core::forms::DateParts;
use stratbook_core::tree::TreeItem;
use stratbook_core::types::{DbId, Timestamp};

use crate::models::stage::Stage;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub parent_event_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An event with its stages attached, as served by the tree endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct EventWithStages {
    #[serde(flatten)]
    pub event: Event,
    pub stages: Vec<Stage>,
}

impl TreeItem for EventWithStages {
    fn id(&self) -> DbId {
        self.event.id
    }

    fn parent_id(&self) -> Option<DbId> {
        self.event.parent_event_id
    }
}

/// DTO for creating a new event.
///
/// Dates arrive as raw select parts; the handler resolves them against
/// `has_duration` before anything is inserted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub has_duration: bool,
    #[serde(default)]
    pub start_date: DateParts,
    #[serde(default)]
    pub end_date: DateParts,
    pub parent_event_id: Option<DbId>,
}

/// DTO for updating an event. `None` fields are left unchanged; a present
/// `has_duration` re-resolves (or clears) both dates.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    pub name: Option<String>,
    pub description: Option<String>,
    pub has_duration: Option<bool>,
    #[serde(default)]
    pub start_date: DateParts,
    #[serde(default)]
    pub end_date: DateParts,
}

/// Request body for moving an event to a new parent (`None` = root).
#[derive(Debug, Clone, Deserialize)]
pub struct MoveEvent {
    pub new_parent_id: Option<DbId>,
}
