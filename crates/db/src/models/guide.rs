//! Guide entity model and DTOs.
//!
//! A guide is one YouTube video cleared against one stage, with the
//! operator lineup and free-form tags attached through junction tables.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stratbook_core::types::{DbId, Timestamp};

use crate::models::operator::Operator;
use crate::models::tag::Tag;

/// A row from the `guides` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Guide {
    pub id: DbId,
    pub stage_id: DbId,
    pub title: String,
    pub video_id: String,
    pub submitted_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A guide with its lineup and tags resolved, as listed under a stage.
#[derive(Debug, Clone, Serialize)]
pub struct GuideDetails {
    #[serde(flatten)]
    pub guide: Guide,
    pub operators: Vec<Operator>,
    pub tags: Vec<Tag>,
}

/// DTO for submitting a new guide.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGuide {
    pub stage_id: DbId,
    pub title: String,
    pub video_id: String,
    pub submitted_by: Option<String>,
    /// Lineup references; every id must exist.
    #[serde(default)]
    pub operator_ids: Vec<DbId>,
    /// Tag names as typed; created on first use.
    #[serde(default)]
    pub tags: Vec<String>,
}
