//! Shared type definitions for the Eventhub service.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for event identifiers
//! - [`event`] -- The [`Event`] entity and its [`EventDocument`] body

pub mod event;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use event::{Event, EventDocument, ID_KEY};
pub use ids::EventId;
