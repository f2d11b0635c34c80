//! In-process implementation of [`EventRepository`].
//!
//! Backs the `memory` database backend and the router tests. Records are
//! kept in insertion order behind a [`RwLock`]; identifiers are UUID v7.

use async_trait::async_trait;
use eventhub_types::{Event, EventDocument, EventId};
use tokio::sync::RwLock;

use crate::error::DbError;
use crate::repository::{DeleteOutcome, EventRepository, UpdateOutcome};

/// Event collection held in memory. Never fails.
#[derive(Debug, Default)]
pub struct MemoryEventRepository {
    events: RwLock<Vec<Event>>,
}

impl MemoryEventRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events.
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    /// Whether the repository holds no events.
    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

#[async_trait]
impl EventRepository for MemoryEventRepository {
    async fn find_all(&self) -> Result<Vec<Event>, DbError> {
        Ok(self.events.read().await.clone())
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, DbError> {
        let events = self.events.read().await;
        Ok(events.iter().find(|event| event.id == id).cloned())
    }

    async fn create(&self, document: EventDocument) -> Result<Event, DbError> {
        let event = Event::new(EventId::new(), document);
        self.events.write().await.push(event.clone());
        tracing::debug!(id = %event.id, "Inserted event");
        Ok(event)
    }

    async fn update(
        &self,
        id: EventId,
        document: EventDocument,
    ) -> Result<UpdateOutcome, DbError> {
        let mut events = self.events.write().await;
        let Some(event) = events.iter_mut().find(|event| event.id == id) else {
            return Ok(UpdateOutcome::NotFound);
        };
        event.document = document;
        tracing::debug!(%id, "Updated event");
        Ok(UpdateOutcome::Updated)
    }

    async fn delete(&self, id: EventId) -> Result<DeleteOutcome, DbError> {
        let mut events = self.events.write().await;
        let Some(pos) = events.iter().position(|event| event.id == id) else {
            return Ok(DeleteOutcome::NotFound);
        };
        events.remove(pos);
        tracing::debug!(%id, "Deleted event");
        Ok(DeleteOutcome::Deleted)
    }

    async fn delete_all(&self) -> Result<u64, DbError> {
        let mut events = self.events.write().await;
        let count = u64::try_from(events.len()).unwrap_or(u64::MAX);
        events.clear();
        tracing::debug!(count, "Deleted all events");
        Ok(count)
    }
}
