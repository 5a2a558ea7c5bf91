//! Repository for the `operators` table.

use sqlx::PgPool;
use stratbook_core::types::DbId;

use crate::models::operator::{CreateOperator, Operator};

/// Column list for operators queries.
const COLUMNS: &str = "id, name, rarity, created_at, updated_at";

/// Provides CRUD operations for operators.
pub struct OperatorRepo;

impl OperatorRepo {
    /// List all operators, rarest first, then by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Operator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM operators ORDER BY rarity DESC, name ASC");
        sqlx::query_as::<_, Operator>(&query).fetch_all(pool).await
    }

    /// Find an operator by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Operator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM operators WHERE id = $1");
        sqlx::query_as::<_, Operator>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new operator, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateOperator) -> Result<Operator, sqlx::Error> {
        let query = format!(
            "INSERT INTO operators (name, rarity)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Operator>(&query)
            .bind(input.name.trim())
            .bind(input.rarity)
            .fetch_one(pool)
            .await
    }
}
