//! Repository for the `guides` table and its junction tables.

use sqlx::PgPool;
use stratbook_core::types::DbId;

use crate::models::guide::{CreateGuide, Guide};
use crate::models::operator::Operator;
use crate::models::tag::Tag;

/// Column list for guides queries.
const COLUMNS: &str = "id, stage_id, title, video_id, submitted_by, created_at, updated_at";

/// Provides CRUD operations for guides.
pub struct GuideRepo;

impl GuideRepo {
    /// List the guides for one stage, newest first.
    pub async fn list_by_stage(pool: &PgPool, stage_id: DbId) -> Result<Vec<Guide>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM guides
             WHERE stage_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Guide>(&query)
            .bind(stage_id)
            .fetch_all(pool)
            .await
    }

    /// Find a guide by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Guide>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guides WHERE id = $1");
        sqlx::query_as::<_, Guide>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a guide with its lineup and tag links, all or nothing.
    ///
    /// `tag_ids` must already be resolved (see `TagRepo::create_or_get`).
    /// A lineup reference to a missing operator fails the whole insert
    /// with the foreign-key violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGuide,
        tag_ids: &[DbId],
    ) -> Result<Guide, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO guides (stage_id, title, video_id, submitted_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let guide = sqlx::query_as::<_, Guide>(&query)
            .bind(input.stage_id)
            .bind(input.title.trim())
            .bind(input.video_id.trim())
            .bind(&input.submitted_by)
            .fetch_one(&mut *tx)
            .await?;

        for &operator_id in &input.operator_ids {
            sqlx::query(
                "INSERT INTO guide_operators (guide_id, operator_id)
                 VALUES ($1, $2)
                 ON CONFLICT (guide_id, operator_id) DO NOTHING",
            )
            .bind(guide.id)
            .bind(operator_id)
            .execute(&mut *tx)
            .await?;
        }

        for &tag_id in tag_ids {
            sqlx::query(
                "INSERT INTO guide_tags (guide_id, tag_id)
                 VALUES ($1, $2)
                 ON CONFLICT (guide_id, tag_id) DO NOTHING",
            )
            .bind(guide.id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(guide)
    }

    /// The operator lineup of one guide, rarest first, then by name.
    pub async fn operators_for(pool: &PgPool, guide_id: DbId) -> Result<Vec<Operator>, sqlx::Error> {
        sqlx::query_as::<_, Operator>(
            "SELECT o.id, o.name, o.rarity, o.created_at, o.updated_at
             FROM guide_operators go
             JOIN operators o ON o.id = go.operator_id
             WHERE go.guide_id = $1
             ORDER BY o.rarity DESC, o.name ASC",
        )
        .bind(guide_id)
        .fetch_all(pool)
        .await
    }

    /// The tags of one guide, name ascending.
    pub async fn tags_for(pool: &PgPool, guide_id: DbId) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.name, t.created_at
             FROM guide_tags gt
             JOIN tags t ON t.id = gt.tag_id
             WHERE gt.guide_id = $1
             ORDER BY t.name ASC",
        )
        .bind(guide_id)
        .fetch_all(pool)
        .await
    }

    /// Delete a guide by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM guides WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
