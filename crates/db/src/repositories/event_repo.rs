//! Repository for the `events` table.

use sqlx::{FromRow, PgPool};
use stratbook_core::forms::EventDates;
use stratbook_core::moves::DestinationInfo;
use stratbook_core::types::DbId;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

/// Column list for events queries.
const COLUMNS: &str =
    "id, name, description, start_date, end_date, parent_event_id, created_at, updated_at";

/// Occupancy facts about one event, as a move/create destination.
#[derive(Debug, FromRow)]
struct DestinationRow {
    name: String,
    has_child_events: bool,
    has_stages: bool,
}

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// List all events as a flat set, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY id ASC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Find an event by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new event, returning the created row.
    ///
    /// `dates` is the already-validated resolution of the request's date
    /// parts; both sides are `None` for events without a duration.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEvent,
        dates: EventDates,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (name, description, start_date, end_date, parent_event_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(input.name.trim())
            .bind(&input.description)
            .bind(dates.start)
            .bind(dates.end)
            .bind(input.parent_event_id)
            .fetch_one(pool)
            .await
    }

    /// Update an event by ID, returning the updated row.
    ///
    /// `dates` follows the request's `has_duration`: `None` leaves both
    /// date columns untouched, `Some` overwrites them (clearing included).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
        dates: Option<EventDates>,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                start_date = CASE WHEN $4 THEN $5 ELSE start_date END,
                end_date = CASE WHEN $4 THEN $6 ELSE end_date END,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.description)
            .bind(dates.is_some())
            .bind(dates.and_then(|d| d.start))
            .bind(dates.and_then(|d| d.end))
            .fetch_optional(pool)
            .await
    }

    /// Re-parent an event (`None` moves it to the root), returning the
    /// updated row.
    pub async fn move_to(
        pool: &PgPool,
        id: DbId,
        new_parent_id: Option<DbId>,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET parent_event_id = $2, updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(new_parent_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event by ID. Child events and stages cascade away with it.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Describe one event as a move/create destination for the validator.
    ///
    /// Returns `Ok(None)` when the event does not exist.
    pub async fn destination_info(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DestinationInfo>, sqlx::Error> {
        let row = sqlx::query_as::<_, DestinationRow>(
            "SELECT name,
                EXISTS (SELECT 1 FROM events c WHERE c.parent_event_id = e.id)
                    AS has_child_events,
                EXISTS (SELECT 1 FROM stages s WHERE s.event_id = e.id)
                    AS has_stages
             FROM events e WHERE e.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|r| DestinationInfo::event(id, r.name, r.has_child_events, r.has_stages)))
    }

    /// Describe the root container (top-level events, unowned stages) as a
    /// move/create destination.
    pub async fn root_info(pool: &PgPool) -> Result<DestinationInfo, sqlx::Error> {
        let has_child_events = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM events WHERE parent_event_id IS NULL)",
        )
        .fetch_one(pool)
        .await?;
        let has_stages = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM stages WHERE event_id IS NULL)",
        )
        .fetch_one(pool)
        .await?;
        Ok(DestinationInfo::root(has_child_events, has_stages))
    }
}
