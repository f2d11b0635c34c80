//! JSON response body with an explicit UTF-8 charset.
//!
//! Every JSON body the API returns goes through [`JsonBody`] so clients see
//! `Content-Type: application/json; charset=utf-8` on all of them.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Content type of every JSON response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// A status code paired with a value serialized as the JSON body.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub StatusCode, pub T);

impl<T> JsonBody<T> {
    /// A `200 OK` response.
    pub const fn ok(value: T) -> Self {
        Self(StatusCode::OK, value)
    }

    /// A `201 Created` response.
    pub const fn created(value: T) -> Self {
        Self(StatusCode::CREATED, value)
    }
}

impl<T: Serialize> IntoResponse for JsonBody<T> {
    fn into_response(self) -> Response {
        let Self(status, value) = self;
        match serde_json::to_vec(&value) {
            Ok(bytes) => (
                status,
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                bytes,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sets_status_and_charset() {
        let response = JsonBody::created(serde_json::json!({"ok": true})).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            JSON_CONTENT_TYPE
        );
    }
}
