//! Repository for the `tags` table.

use sqlx::PgPool;

use crate::models::tag::Tag;

/// Column list for tags queries.
const COLUMNS: &str = "id, name, created_at";

/// Provides operations for tags.
pub struct TagRepo;

impl TagRepo {
    /// Create a tag or return the existing one if the normalized name
    /// already exists.
    ///
    /// Uses `ON CONFLICT` for idempotent creation; the no-op update makes
    /// `RETURNING` yield the existing row on conflict.
    pub async fn create_or_get(pool: &PgPool, name: &str) -> Result<Tag, sqlx::Error> {
        let normalized = normalize_tag_name(name);
        let query = format!(
            "INSERT INTO tags (name)
             VALUES ($1)
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(&normalized)
            .fetch_one(pool)
            .await
    }

    /// List all tags, name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags ORDER BY name ASC");
        sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await
    }
}

/// Normalize a tag name: trim whitespace and lowercase.
pub fn normalize_tag_name(name: &str) -> String {
    name.trim().to_lowercase()
}
