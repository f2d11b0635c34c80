//! HTTP API server for the Eventhub service.
//!
//! This crate provides an Axum HTTP server exposing CRUD endpoints over the
//! event collection:
//!
//! - `GET /events`, `POST /events`
//! - `GET /events/{id}`, `PUT /events/{id}`, `DELETE /events/{id}`
//!
//! # Architecture
//!
//! Handlers are thin: each one calls the injected
//! [`EventRepository`](eventhub_db::EventRepository) held in [`AppState`]
//! and maps the outcome to a status code. Missing and malformed ids both
//! answer `404 {"error":"Event not found"}`; store failures answer `500`.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod server;
pub mod state;
pub mod validation;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, serve, shutdown_signal, start_server};
pub use state::AppState;
