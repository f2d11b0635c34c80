//! REST endpoint handlers for the event collection.
//!
//! Each handler makes one call into the injected [`EventRepository`] (plus
//! a re-fetch after `PUT`) and maps the outcome to a status code.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/events` | List all events |
//! | `POST` | `/events` | Create an event |
//! | `GET` | `/events/{id}` | Get a single event |
//! | `PUT` | `/events/{id}` | Replace an event's body |
//! | `DELETE` | `/events/{id}` | Delete an event |
//!
//! [`EventRepository`]: eventhub_db::EventRepository

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use eventhub_db::{DeleteOutcome, UpdateOutcome};
use eventhub_types::{Event, EventDocument, EventId};

use crate::error::ApiError;
use crate::response::JsonBody;
use crate::state::AppState;
use crate::validation::validate_document;

/// Unwrap the `{id}` segment. A segment axum cannot decode is just another
/// malformed id.
fn path_segment(id: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    id.map(|Path(id)| id).map_err(|_rejection| ApiError::NotFound)
}

/// Unwrap the `{id}` segment and parse it as an [`EventId`].
fn path_id(id: Result<Path<String>, PathRejection>) -> Result<EventId, ApiError> {
    EventId::parse(&path_segment(id)?).ok_or(ApiError::NotFound)
}

/// Unwrap a JSON body and apply strict validation when enabled.
fn accept_body(
    state: &AppState,
    payload: Result<Json<EventDocument>, JsonRejection>,
) -> Result<EventDocument, ApiError> {
    let Json(document) = payload?;
    if state.strict_validation {
        validate_document(&document)?;
    }
    Ok(document)
}

// ---------------------------------------------------------------------------
// GET /events
// ---------------------------------------------------------------------------

/// List every stored event in the store's natural order.
pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<JsonBody<Vec<Event>>, ApiError> {
    let events = state.repository.find_all().await?;
    Ok(JsonBody::ok(events))
}

// ---------------------------------------------------------------------------
// POST /events
// ---------------------------------------------------------------------------

/// Store the request body as a new event and return it with its id.
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EventDocument>, JsonRejection>,
) -> Result<JsonBody<Event>, ApiError> {
    let document = accept_body(&state, payload)?;
    let event = state.repository.create(document).await?;
    tracing::info!(id = %event.id, "Event created");
    Ok(JsonBody::created(event))
}

// ---------------------------------------------------------------------------
// GET /events/{id}
// ---------------------------------------------------------------------------

/// Return a single event. Malformed ids are reported as not found.
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<JsonBody<Event>, ApiError> {
    let id = path_segment(id)?;
    state
        .repository
        .find(&id)
        .await?
        .map(JsonBody::ok)
        .ok_or(ApiError::NotFound)
}

// ---------------------------------------------------------------------------
// PUT /events/{id}
// ---------------------------------------------------------------------------

/// Replace an event's body and return the stored result.
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<EventDocument>, JsonRejection>,
) -> Result<JsonBody<Event>, ApiError> {
    let id = path_id(id)?;
    let document = accept_body(&state, payload)?;

    match state.repository.update(id, document).await? {
        UpdateOutcome::Updated => {}
        UpdateOutcome::NotFound => return Err(ApiError::NotFound),
    }
    tracing::info!(%id, "Event updated");

    // Deleted between the update and the re-fetch.
    state
        .repository
        .find_by_id(id)
        .await?
        .map(JsonBody::ok)
        .ok_or(ApiError::NotFound)
}

// ---------------------------------------------------------------------------
// DELETE /events/{id}
// ---------------------------------------------------------------------------

/// Delete an event. Answers `204 No Content` with an empty body.
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(id)?;

    match state.repository.delete(id).await? {
        DeleteOutcome::Deleted => {
            tracing::info!(%id, "Event deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        DeleteOutcome::NotFound => Err(ApiError::NotFound),
    }
}
