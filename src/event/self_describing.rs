//! Self-Describing Event
//!
//! A custom event carrying its own schema URI. The tracker wraps the
//! data in the unstruct envelope at send time; here we only validate
//! and hold it.

use serde_json::Value;

use crate::error::{Result, TrackerError};
use crate::payload::{Payload, SelfDescribingJson};

use super::{Event, EventBase};

/// A custom event described by an explicit schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SelfDescribing {
    base: EventBase,
    schema: String,
    data: Value,
}

impl SelfDescribing {
    pub fn builder() -> SelfDescribingBuilder {
        SelfDescribingBuilder::default()
    }

    pub fn schema_uri(&self) -> &str {
        &self.schema
    }

    pub fn data(&self) -> &Value {
        &self.data
    }
}

impl Event for SelfDescribing {
    fn data_payload(&self) -> Payload {
        let mut payload = Payload::new();
        if let Value::Object(entries) = &self.data {
            for (key, value) in entries {
                payload.add_value(key, value.clone());
            }
        }
        payload
    }

    /// The schema URI doubles as the event name for routing.
    fn name(&self) -> &str {
        &self.schema
    }

    fn schema(&self) -> Option<&str> {
        Some(&self.schema)
    }

    fn true_timestamp(&self) -> Option<i64> {
        self.base.true_timestamp
    }

    fn contexts(&self) -> &[SelfDescribingJson] {
        &self.base.contexts
    }
}

/// One-shot builder for [`SelfDescribing`].
#[derive(Debug, Clone, Default)]
pub struct SelfDescribingBuilder {
    base: EventBase,
    event_data: Option<SelfDescribingJson>,
}

impl SelfDescribingBuilder {
    /// The schema'd data describing the event.
    pub fn event_data(mut self, event_data: SelfDescribingJson) -> Self {
        self.event_data = Some(event_data);
        self
    }

    /// Application-asserted event time, epoch millis.
    pub fn true_timestamp(mut self, true_timestamp: i64) -> Self {
        self.base.true_timestamp = Some(true_timestamp);
        self
    }

    /// Attach a custom context entry. Order is preserved.
    pub fn context(mut self, context: SelfDescribingJson) -> Self {
        self.base.contexts.push(context);
        self
    }

    /// Validate the event data (schema set and non-empty, data a JSON
    /// object) and build the immutable event.
    pub fn build(self) -> Result<SelfDescribing> {
        let event_data = self
            .event_data
            .ok_or(TrackerError::MissingField("event data"))?;
        if event_data.schema.is_empty() {
            return Err(TrackerError::EmptyField("schema"));
        }
        if !event_data.data.is_object() {
            return Err(TrackerError::InvalidEventData);
        }

        Ok(SelfDescribing {
            base: self.base,
            schema: event_data.schema,
            data: event_data.data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use serde_json::json;

    const SCHEMA: &str = "iglu:com.acme/link_click/jsonschema/1-0-0";

    #[test]
    fn test_payload_carries_data_entries() {
        let event = SelfDescribing::builder()
            .event_data(SelfDescribingJson::new(SCHEMA, json!({"target": "btn", "depth": 3})))
            .build()
            .unwrap();

        let payload = event.data_payload();
        assert_eq!(payload.get("target"), Some(&json!("btn")));
        assert_eq!(payload.get("depth"), Some(&json!(3)));
        assert_eq!(event.name(), SCHEMA);
        assert_eq!(event.schema(), Some(SCHEMA));
    }

    #[test]
    fn test_missing_event_data_fails() {
        let err = SelfDescribing::builder().build().unwrap_err();
        assert!(matches!(err, TrackerError::MissingField("event data")));
    }

    #[test]
    fn test_empty_schema_fails() {
        let err = SelfDescribing::builder()
            .event_data(SelfDescribingJson::new("", json!({})))
            .build()
            .unwrap_err();
        assert!(matches!(err, TrackerError::EmptyField("schema")));
    }

    #[test]
    fn test_non_object_data_fails() {
        let err = SelfDescribing::builder()
            .event_data(SelfDescribingJson::new(SCHEMA, json!([1, 2])))
            .build()
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidEventData));
    }

    #[test]
    fn test_true_timestamp_round_trip() {
        let event = SelfDescribing::builder()
            .event_data(SelfDescribingJson::new(SCHEMA, json!({})))
            .true_timestamp(123456789)
            .build()
            .unwrap();
        assert_eq!(event.true_timestamp(), Some(123456789));
    }
}
