//! Error types for the HTTP layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body has the shape `{"error": "<message>"}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use eventhub_db::DbError;

use crate::response::JsonBody;

/// Message returned for a missing or malformed event identifier.
pub const NOT_FOUND_MESSAGE: &str = "Event not found";

/// Message returned for store failures. Details stay in the logs.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Errors that can occur while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No event has the requested identifier, or the identifier is malformed.
    #[error("Event not found")]
    NotFound,

    /// The request body was not a JSON object.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Strict validation rejected the request body.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The store failed to complete the operation.
    #[error("store error: {0}")]
    Store(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_owned()),
            Self::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            Self::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            Self::Store(e) => {
                tracing::error!(error = %e, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_owned())
            }
        };

        JsonBody(status, serde_json::json!({ "error": message })).into_response()
    }
}
