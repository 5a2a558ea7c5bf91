//! Repository for the `stages` table.

use sqlx::PgPool;
use stratbook_core::editor::PendingStage;
use stratbook_core::types::DbId;

use crate::models::stage::{Stage, UpdateStage};

/// Column list for stages queries.
const COLUMNS: &str = "id, event_id, name, code, created_at, updated_at";

/// Provides CRUD operations for stages.
pub struct StageRepo;

impl StageRepo {
    /// List every stage, grouped by owning event and then by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Stage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stages ORDER BY event_id ASC, id ASC");
        sqlx::query_as::<_, Stage>(&query).fetch_all(pool).await
    }

    /// List the stages owned by one event.
    pub async fn list_by_event(pool: &PgPool, event_id: DbId) -> Result<Vec<Stage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stages WHERE event_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Stage>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Find a stage by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Stage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stages WHERE id = $1");
        sqlx::query_as::<_, Stage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an already-validated batch under one event, all or nothing.
    ///
    /// Returns the created rows in batch order.
    pub async fn create_batch(
        pool: &PgPool,
        event_id: DbId,
        batch: &[PendingStage],
    ) -> Result<Vec<Stage>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO stages (event_id, name, code)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let mut created = Vec::with_capacity(batch.len());
        for stage in batch {
            let row = sqlx::query_as::<_, Stage>(&query)
                .bind(event_id)
                .bind(&stage.name)
                .bind(&stage.code)
                .fetch_one(&mut *tx)
                .await?;
            created.push(row);
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Update a stage by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStage,
    ) -> Result<Option<Stage>, sqlx::Error> {
        let query = format!(
            "UPDATE stages SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stage>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.code)
            .fetch_optional(pool)
            .await
    }

    /// Re-home a stage (`None` parks it at the root), returning the
    /// updated row.
    pub async fn move_to(
        pool: &PgPool,
        id: DbId,
        new_event_id: Option<DbId>,
    ) -> Result<Option<Stage>, sqlx::Error> {
        let query = format!(
            "UPDATE stages SET event_id = $2, updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Stage>(&query)
            .bind(id)
            .bind(new_event_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a stage by ID. Its guides cascade away with it. Returns
    /// `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
