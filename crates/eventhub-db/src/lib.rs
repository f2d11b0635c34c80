//! Data layer for the Eventhub service.
//!
//! Events are stored as JSON documents. `PostgreSQL` is the production store
//! (one `events` table, JSONB body); an in-memory store backs tests and
//! local runs. Both sit behind the [`EventRepository`] trait.
//!
//! ```text
//! HTTP handlers
//!     |
//!     +-- Arc<dyn EventRepository>  (handed out by Container)
//!         |-- PgEventRepository      (PostgreSQL, PostgresPool)
//!         +-- MemoryEventRepository  (tokio RwLock)
//! ```
//!
//! # Modules
//!
//! - [`repository`] -- The data-access trait and its outcome types
//! - [`event_store`] -- `PostgreSQL` implementation
//! - [`memory`] -- In-memory implementation
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`container`] -- Connection provider owning the repository
//! - [`error`] -- Shared error types

pub mod container;
pub mod error;
pub mod event_store;
pub mod memory;
pub mod postgres;
pub mod repository;

// Re-export primary types for convenience.
pub use container::Container;
pub use error::DbError;
pub use event_store::{EventRow, PgEventRepository};
pub use memory::MemoryEventRepository;
pub use postgres::{PostgresConfig, PostgresPool};
pub use repository::{DeleteOutcome, EventRepository, UpdateOutcome};
