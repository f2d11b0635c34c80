//! Shared application state for the API server.
//!
//! [`AppState`] carries the injected store handle. It is built once at
//! startup, wrapped in [`Arc`], and handed to every handler through Axum's
//! `State` extractor; there is no process-wide connection singleton.

use std::sync::Arc;

use eventhub_db::{Container, EventRepository};

/// Shared state for the Axum application.
#[derive(Clone)]
pub struct AppState {
    /// The event store every request reads from and writes to.
    pub repository: Arc<dyn EventRepository>,
    /// Whether `POST`/`PUT` bodies must pass strict validation.
    pub strict_validation: bool,
}

impl AppState {
    /// Create state around a repository with validation off.
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self {
            repository,
            strict_validation: false,
        }
    }

    /// Create state from a connected [`Container`].
    pub fn from_container(container: &Container) -> Self {
        Self::new(container.repository())
    }

    /// Enable or disable strict validation of request bodies.
    #[must_use]
    pub const fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }
}
