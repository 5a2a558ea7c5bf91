//! Tag entity model.

use serde::Serialize;
use sqlx::FromRow;
use stratbook_core::types::{DbId, Timestamp};

/// A row from the `tags` table. Names are stored normalized (trimmed,
/// lowercased) and are unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}
