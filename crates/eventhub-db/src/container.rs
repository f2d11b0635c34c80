//! Connection provider for the event store.
//!
//! A [`Container`] is built once at startup and owns the store handle for
//! the lifetime of the process. Request handling only ever sees the
//! [`EventRepository`] it hands out; the pool itself is exposed for
//! lifecycle management (tests, shutdown).

use std::sync::Arc;

use crate::error::DbError;
use crate::event_store::PgEventRepository;
use crate::memory::MemoryEventRepository;
use crate::postgres::{PostgresConfig, PostgresPool};
use crate::repository::EventRepository;

/// Owns a connected event repository and, for `PostgreSQL`, its pool.
#[derive(Clone)]
pub struct Container {
    repository: Arc<dyn EventRepository>,
    pool: Option<PostgresPool>,
}

impl Container {
    /// Connect to `PostgreSQL`, apply migrations, and wrap the pool.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the connection or a migration fails.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, DbError> {
        let pool = PostgresPool::open(config).await?;

        let repository = Arc::new(PgEventRepository::new(pool.pool().clone()));
        Ok(Self {
            repository,
            pool: Some(pool),
        })
    }

    /// Build a container over an empty in-memory store.
    pub fn in_memory() -> Self {
        tracing::info!("Using in-memory event store");
        Self::from_repository(Arc::new(MemoryEventRepository::new()))
    }

    /// Wrap an existing repository. No pool is attached.
    pub fn from_repository(repository: Arc<dyn EventRepository>) -> Self {
        Self {
            repository,
            pool: None,
        }
    }

    /// A shared handle to the repository.
    pub fn repository(&self) -> Arc<dyn EventRepository> {
        Arc::clone(&self.repository)
    }

    /// The `PostgreSQL` pool, when the container is backed by one.
    pub const fn pool(&self) -> Option<&PostgresPool> {
        self.pool.as_ref()
    }

    /// Release the underlying connections. A no-op for the in-memory store.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use eventhub_types::EventDocument;

    use super::*;

    #[tokio::test]
    async fn in_memory_container_shares_one_store() {
        let container = Container::in_memory();
        assert!(container.pool().is_none());

        let created = container
            .repository()
            .create(EventDocument::new("Copa do Mundo", "2026-01-01"))
            .await
            .unwrap();

        let seen = container.repository().find_all().await.unwrap();
        assert_eq!(seen, vec![created]);

        container.close().await;
    }
}
