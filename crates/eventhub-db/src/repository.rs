//! The data-access seam between the HTTP layer and the store.
//!
//! [`EventRepository`] is object safe so the router can hold an
//! `Arc<dyn EventRepository>` without knowing which backend is behind it.

use async_trait::async_trait;
use eventhub_types::{Event, EventDocument, EventId};

use crate::error::DbError;

/// Result of [`EventRepository::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A record matched and its document was replaced.
    Updated,
    /// No record has the given identifier.
    NotFound,
}

/// Result of [`EventRepository::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// A record matched and was removed.
    Deleted,
    /// No record has the given identifier.
    NotFound,
}

/// CRUD operations on the event collection.
///
/// Store-level failures surface as [`DbError`]. Nothing here retries.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Every stored event in insertion order. Empty when the store is empty.
    async fn find_all(&self) -> Result<Vec<Event>, DbError>;

    /// Look up an event by its raw identifier string.
    ///
    /// A string that does not parse as an [`EventId`] yields `Ok(None)`,
    /// exactly like a well-formed identifier with no record behind it.
    async fn find(&self, id: &str) -> Result<Option<Event>, DbError> {
        match EventId::parse(id) {
            Some(id) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// Look up an event by an already-parsed identifier.
    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, DbError>;

    /// Insert a new event. The store assigns the identifier.
    async fn create(&self, document: EventDocument) -> Result<Event, DbError>;

    /// Replace the document of the event with the given identifier.
    async fn update(&self, id: EventId, document: EventDocument)
    -> Result<UpdateOutcome, DbError>;

    /// Remove the event with the given identifier.
    async fn delete(&self, id: EventId) -> Result<DeleteOutcome, DbError>;

    /// Remove every event and return how many were removed.
    async fn delete_all(&self) -> Result<u64, DbError>;
}
