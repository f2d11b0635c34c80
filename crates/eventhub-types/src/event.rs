//! The `Event` entity and its free-form document body.
//!
//! An event is stored as an arbitrary JSON object. By convention the object
//! carries a `name` and a `YYYY-MM-DD` `date`, but nothing here enforces
//! that: whatever object a client sends is kept as-is. The only key that is
//! ever removed is `id`, which belongs to the store.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::ids::EventId;

/// Key reserved for the store-assigned identifier.
pub const ID_KEY: &str = "id";

/// JSON object body of an event, without its identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventDocument(Map<String, Value>);

impl EventDocument {
    /// Build a document with the conventional `name` and `date` fields.
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("name".to_owned(), Value::String(name.into()));
        map.insert("date".to_owned(), Value::String(date.into()));
        Self(map)
    }

    /// Wrap a JSON object, dropping any client-supplied `id` key.
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        map.remove(ID_KEY);
        Self(map)
    }

    /// The `name` field, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// The `date` field, if present and a string.
    pub fn date(&self) -> Option<&str> {
        self.0.get("date").and_then(Value::as_str)
    }

    /// Look up an arbitrary field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the underlying JSON object.
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl<'de> Deserialize<'de> for EventDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Map::<String, Value>::deserialize(deserializer).map(Self::from_map)
    }
}

impl From<Map<String, Value>> for EventDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

/// A stored event: its identifier plus its document, flattened on the wire.
///
/// Serializes as `{"id": "...", "name": "...", "date": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier. Never changes after creation.
    pub id: EventId,
    /// The event body.
    #[serde(flatten)]
    pub document: EventDocument,
}

impl Event {
    /// Pair an identifier with a document.
    pub const fn new(id: EventId, document: EventDocument) -> Self {
        Self { id, document }
    }

    /// The `name` field of the document, if any.
    pub fn name(&self) -> Option<&str> {
        self.document.name()
    }

    /// The `date` field of the document, if any.
    pub fn date(&self) -> Option<&str> {
        self.document.date()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn event_serializes_flat_with_id() {
        let id = EventId::new();
        let event = Event::new(id, EventDocument::new("Copa do Mundo", "2026-01-01"));

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            json!({
                "id": id.to_string(),
                "name": "Copa do Mundo",
                "date": "2026-01-01",
            })
        );
    }

    #[test]
    fn document_drops_client_supplied_id() {
        let doc: EventDocument = serde_json::from_value(json!({
            "id": "forged",
            "name": "Rock in Rio",
            "date": "2030-01-01",
        }))
        .unwrap();

        assert!(doc.get(ID_KEY).is_none());
        assert_eq!(doc.name(), Some("Rock in Rio"));
        assert_eq!(doc.date(), Some("2030-01-01"));
    }

    #[test]
    fn document_keeps_unknown_fields() {
        let doc: EventDocument = serde_json::from_value(json!({
            "name": "Festival",
            "venue": {"city": "Recife"},
            "tags": ["music"],
        }))
        .unwrap();

        assert_eq!(doc.date(), None);
        assert_eq!(doc.get("venue"), Some(&json!({"city": "Recife"})));
        assert_eq!(doc.as_map().len(), 3);
    }

    #[test]
    fn document_rejects_non_objects() {
        assert!(serde_json::from_value::<EventDocument>(json!([1, 2])).is_err());
        assert!(serde_json::from_value::<EventDocument>(json!("text")).is_err());
    }

    #[test]
    fn event_deserializes_from_flat_json() {
        let id = EventId::new();
        let event: Event = serde_json::from_value(json!({
            "id": id.to_string(),
            "name": "Copa do Mundo",
            "date": "2026-01-01",
        }))
        .unwrap();

        assert_eq!(event.id, id);
        assert_eq!(event.name(), Some("Copa do Mundo"));
        assert_eq!(event.document.as_map().len(), 2);
    }
}
