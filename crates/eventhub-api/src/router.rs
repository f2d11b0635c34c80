//! Axum router construction for the Eventhub API.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /events` -- list events
/// - `POST /events` -- create an event
/// - `GET /events/{id}` -- single event
/// - `PUT /events/{id}` -- replace an event's body
/// - `DELETE /events/{id}` -- delete an event
///
/// CORS allows any origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/events",
            get(handlers::list_events).post(handlers::create_event),
        )
        .route(
            "/events/{id}",
            get(handlers::get_event)
                .put(handlers::update_event)
                .delete(handlers::delete_event),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
