//! Opt-in validation of event bodies.
//!
//! Off by default: the API stores whatever JSON object it receives. With
//! `strict_validation` enabled, `POST` and `PUT` bodies must carry a
//! non-empty string `name` and a `date` in `YYYY-MM-DD` form. Extra keys
//! are still allowed and stored.

use std::borrow::Cow;

use chrono::NaiveDate;
use eventhub_types::EventDocument;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::ApiError;

/// Length of a `YYYY-MM-DD` date string.
const DATE_LEN: usize = 10;

/// The fields strict validation requires.
#[derive(Debug, Deserialize, Validate)]
struct EventPayload {
    #[validate(length(min = 1, message = "name must not be empty"))]
    name: String,
    #[validate(custom(function = "validate_date"))]
    date: String,
}

/// Check a document against the strict rules.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] naming the offending fields.
pub fn validate_document(document: &EventDocument) -> Result<(), ApiError> {
    let value = serde_json::Value::Object(document.as_map().clone());
    let payload: EventPayload =
        serde_json::from_value(value).map_err(|e| ApiError::Validation(e.to_string()))?;

    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))
}

fn validate_date(date: &str) -> Result<(), ValidationError> {
    if date.len() == DATE_LEN && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("date")
        .with_message(Cow::Borrowed("date must be a calendar date in YYYY-MM-DD form")))
}
