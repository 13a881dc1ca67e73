//! Event repository: the only component that talks to storage.
//!
//! Each operation is a single parameterized statement. Zero rows is a normal
//! outcome (`None`), distinct from a failed statement (`Error::Database`).

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Event, EventPatch, NewEvent};
use crate::Result;

/// The five operations against the `events` table.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// All events, ascending by `id`. No pagination.
    async fn list(&self) -> Result<Vec<Event>>;

    /// Zero or one event matching the external key.
    async fn get_by_key(&self, event_id: &str) -> Result<Option<Event>>;

    /// Insert a row; the server assigns `id`. Returns the full inserted row.
    async fn create(&self, new: NewEvent) -> Result<Event>;

    /// Replace notes/timestamp/event on the matching row. `None` when no row
    /// matched; never inserts.
    async fn update(&self, event_id: &str, patch: EventPatch) -> Result<Option<Event>>;

    /// Remove the matching row. `None` when no row matched.
    async fn delete(&self, event_id: &str) -> Result<Option<Event>>;
}

/// Postgres-backed implementation over a shared connection pool.
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for EventRepository {
    async fn list(&self) -> Result<Vec<Event>> {
        let rows = sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_key(&self, event_id: &str) -> Result<Option<Event>> {
        let row = sqlx::query_as::<_, Event>("SELECT * FROM events WHERE eventid = $1")
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, new: NewEvent) -> Result<Event> {
        let row = sqlx::query_as::<_, Event>(
            "INSERT INTO events (eventid, notes, event, timestamp) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&new.event_id)
        .bind(&new.notes)
        .bind(&new.event)
        .bind(&new.timestamp)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, event_id: &str, patch: EventPatch) -> Result<Option<Event>> {
        let row = sqlx::query_as::<_, Event>(
            "UPDATE events SET notes = $1, timestamp = $2, event = $3 \
             WHERE eventid = $4 RETURNING *",
        )
        .bind(&patch.notes)
        .bind(&patch.timestamp)
        .bind(&patch.event)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, event_id: &str) -> Result<Option<Event>> {
        let row = sqlx::query_as::<_, Event>("DELETE FROM events WHERE eventid = $1 RETURNING *")
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
