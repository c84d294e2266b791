//! Event Payload
//!
//! The wire-ready key-value mapping produced from an event, plus the
//! self-describing JSON wrapper used for custom events and contexts.
//! Payloads are built fresh per event and merged by the tracker layer
//! before they reach the emitter.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// PAYLOAD
// ============================================================================

/// Flat mapping from protocol key to JSON value.
///
/// Keys are the fixed short names from [`crate::constants::params`];
/// the collector contract depends on them verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload {
    map: HashMap<String, Value>,
}

impl Payload {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Add a string entry. Empty values are dropped, per the wire
    /// protocol rule that an empty parameter carries no information.
    pub fn add(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            log::debug!("Payload: dropping empty value for key '{}'", key);
            return;
        }
        self.map.insert(key.to_string(), Value::String(value.to_string()));
    }

    /// Add a raw JSON entry (numbers and nested objects keep their type).
    pub fn add_value(&mut self, key: &str, value: Value) {
        if value.is_null() {
            return;
        }
        self.map.insert(key.to_string(), value);
    }

    /// Merge every entry of `other` into this payload. Later entries win.
    pub fn merge(&mut self, other: Payload) {
        self.map.extend(other.map);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn as_map(&self) -> &HashMap<String, Value> {
        &self.map
    }

    pub fn into_map(self) -> HashMap<String, Value> {
        self.map
    }

    /// The payload as a JSON object value.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(&self.map).unwrap_or_else(|_| Value::Object(Default::default()))
    }

    /// Serialized size in bytes, as it would go on the wire.
    pub fn byte_size(&self) -> u64 {
        serde_json::to_string(&self.map)
            .map(|s| s.len() as u64)
            .unwrap_or(0)
    }
}

// ============================================================================
// SELF-DESCRIBING JSON
// ============================================================================

/// A JSON payload wrapped with an explicit schema identifier.
///
/// Used for custom events, custom contexts, the session context and the
/// POST batch envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfDescribingJson {
    pub schema: String,
    pub data: Value,
}

impl SelfDescribingJson {
    pub fn new(schema: &str, data: Value) -> Self {
        Self {
            schema: schema.to_string(),
            data,
        }
    }

    /// Wrap a flat payload as the data member.
    pub fn from_payload(schema: &str, payload: &Payload) -> Self {
        Self::new(schema, payload.to_json())
    }

    /// The wrapper as a JSON value: `{"schema": ..., "data": ...}`.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Default::default()))
    }

}

impl std::fmt::Display for SelfDescribingJson {
    /// Serialized form, for embedding as a string parameter.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string());
        write!(f, "{}", json)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_and_get() {
        let mut payload = Payload::new();
        payload.add("se_ca", "shop");
        payload.add("se_ac", "add-to-basket");

        assert_eq!(payload.len(), 2);
        assert_eq!(payload.get("se_ca"), Some(&json!("shop")));
        assert_eq!(payload.get("se_ac"), Some(&json!("add-to-basket")));
    }

    #[test]
    fn test_empty_string_is_dropped() {
        let mut payload = Payload::new();
        payload.add("se_la", "");
        assert!(payload.is_empty());
        assert!(!payload.contains_key("se_la"));
    }

    #[test]
    fn test_merge_later_wins() {
        let mut base = Payload::new();
        base.add("aid", "app-one");
        base.add("p", "mob");

        let mut overlay = Payload::new();
        overlay.add("aid", "app-two");

        base.merge(overlay);
        assert_eq!(base.get("aid"), Some(&json!("app-two")));
        assert_eq!(base.get("p"), Some(&json!("mob")));
    }

    #[test]
    fn test_byte_size_matches_serialized_form() {
        let mut payload = Payload::new();
        payload.add("e", "se");
        let serialized = serde_json::to_string(&payload).unwrap();
        assert_eq!(payload.byte_size(), serialized.len() as u64);
    }

    #[test]
    fn test_self_describing_shape() {
        let wrapper = SelfDescribingJson::new("iglu:com.acme/link_click/jsonschema/1-0-0", json!({"target": "a"}));
        let value = wrapper.to_value();

        assert_eq!(value["schema"], "iglu:com.acme/link_click/jsonschema/1-0-0");
        assert_eq!(value["data"]["target"], "a");
    }

    #[test]
    fn test_self_describing_from_payload() {
        let mut payload = Payload::new();
        payload.add("name", "home");
        let wrapper = SelfDescribingJson::from_payload("iglu:com.acme/screen/jsonschema/1-0-0", &payload);

        assert_eq!(wrapper.data["name"], "home");
    }
}
