//! Operator entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stratbook_core::types::{DbId, Timestamp};

/// A row from the `operators` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Operator {
    pub id: DbId,
    pub name: String,
    /// Star rating, 1 through 6.
    pub rarity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for seeding a new operator.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOperator {
    pub name: String,
    pub rarity: i32,
}
