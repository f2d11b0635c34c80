//! `PostgreSQL` implementation of [`EventRepository`].
//!
//! Events live in a single `events` table. The body of each event is kept
//! verbatim in a JSONB `document` column; identifiers come from the column
//! default `gen_random_uuid()`, and `seq` gives the natural insertion order.

use async_trait::async_trait;
use eventhub_types::{Event, EventDocument, EventId};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::error::DbError;
use crate::repository::{DeleteOutcome, EventRepository, UpdateOutcome};

/// Operations on the `events` table.
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a repository bound to a connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn find_all(&self) -> Result<Vec<Event>, DbError> {
        let rows = sqlx::query_as::<_, EventRow>(
            r"SELECT id, document
              FROM events
              ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EventRow::into_event).collect())
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, DbError> {
        let row = sqlx::query_as::<_, EventRow>(
            r"SELECT id, document
              FROM events
              WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(EventRow::into_event))
    }

    async fn create(&self, document: EventDocument) -> Result<Event, DbError> {
        let row = sqlx::query_as::<_, EventRow>(
            r"INSERT INTO events (document)
              VALUES ($1)
              RETURNING id, document",
        )
        .bind(Json(&document))
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = %row.id, "Inserted event");
        Ok(row.into_event())
    }

    async fn update(
        &self,
        id: EventId,
        document: EventDocument,
    ) -> Result<UpdateOutcome, DbError> {
        let result = sqlx::query(
            r"UPDATE events
              SET document = $2, updated_at = now()
              WHERE id = $1",
        )
        .bind(id.into_inner())
        .bind(Json(&document))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(UpdateOutcome::NotFound);
        }

        tracing::debug!(%id, "Updated event");
        Ok(UpdateOutcome::Updated)
    }

    async fn delete(&self, id: EventId) -> Result<DeleteOutcome, DbError> {
        let result = sqlx::query(r"DELETE FROM events WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(DeleteOutcome::NotFound);
        }

        tracing::debug!(%id, "Deleted event");
        Ok(DeleteOutcome::Deleted)
    }

    async fn delete_all(&self) -> Result<u64, DbError> {
        let result = sqlx::query(r"DELETE FROM events")
            .execute(&self.pool)
            .await?;

        let count = result.rows_affected();
        tracing::debug!(count, "Deleted all events");
        Ok(count)
    }
}

/// A row from the `events` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventRow {
    /// Store-generated identifier.
    pub id: Uuid,
    /// The event body as stored.
    pub document: Json<EventDocument>,
}

impl EventRow {
    /// Convert the row into the domain [`Event`].
    pub fn into_event(self) -> Event {
        Event::new(EventId::from(self.id), self.document.0)
    }
}
