//! SharedState - read-only snapshot of session data accumulated by the engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::ValidationError;

/// Ordered nested key/value snapshot supplied by the engine on each invocation.
///
/// Values are JSON: scalars, nested objects, or arrays ("multi-valued"
/// leaves). A `null` value is indistinguishable from an absent key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SharedState(Map<String, Value>);

impl SharedState {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Returns a copy of this snapshot with `key` set to `value`.
    ///
    /// Intended for engines and tests assembling a snapshot; the step
    /// itself never calls it.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Looks up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Walks `segments` as successive object lookups.
    ///
    /// Returns `None` as soon as a segment is missing, null, or the
    /// current value is not an object.
    pub fn walk<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Value> {
        let (first, rest) = segments.split_first()?;
        let mut current = self.get(first.as_ref())?;
        for segment in rest {
            current = current
                .as_object()?
                .get(segment.as_ref())
                .filter(|v| !v.is_null())?;
        }
        Some(current)
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for SharedState {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for SharedState {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ValidationError::invalid_format(
                "shared_state",
                format!("expected a JSON object, got {}", json_type_name(&other)),
            )),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> SharedState {
        SharedState::try_from(json!({
            "username": ["bjensen"],
            "user": { "name": ["Alice"], "address": { "city": ["Bristol"] } },
            "missing": null
        }))
        .unwrap()
    }

    #[test]
    fn get_returns_top_level_value() {
        assert_eq!(sample().get("username"), Some(&json!(["bjensen"])));
    }

    #[test]
    fn get_treats_null_as_absent() {
        assert_eq!(sample().get("missing"), None);
        assert_eq!(sample().get("nope"), None);
    }

    #[test]
    fn walk_follows_nested_objects() {
        let state = sample();
        assert_eq!(
            state.walk(&["user", "address", "city"]),
            Some(&json!(["Bristol"]))
        );
    }

    #[test]
    fn walk_stops_at_missing_segment() {
        let state = sample();
        assert_eq!(state.walk(&["user", "email"]), None);
        assert_eq!(state.walk(&["account", "name"]), None);
    }

    #[test]
    fn walk_does_not_descend_into_arrays() {
        assert_eq!(sample().walk(&["username", "0"]), None);
    }

    #[test]
    fn walk_with_no_segments_is_none() {
        let empty: [&str; 0] = [];
        assert_eq!(sample().walk(&empty), None);
    }

    #[test]
    fn try_from_rejects_non_object() {
        let err = SharedState::try_from(json!(["a"])).unwrap_err();
        assert!(err.to_string().contains("expected a JSON object, got array"));
    }

    #[test]
    fn keys_keep_insertion_order() {
        let state = SharedState::new()
            .with("zeta", json!(["z"]))
            .with("alpha", json!(["a"]));
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"zeta":["z"],"alpha":["a"]}"#
        );
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn deserializes_transparently() {
        let state: SharedState = serde_json::from_str(r#"{"k": ["v"]}"#).unwrap();
        assert_eq!(state.get("k"), Some(&json!(["v"])));
    }
}
