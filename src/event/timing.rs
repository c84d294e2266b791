//! Timing Event
//!
//! User timing measurement, sent as a self-describing event. The timing
//! value stays a JSON number inside the schema'd data.

use serde_json::Value;

use crate::constants::schemas;
use crate::error::{Result, TrackerError};
use crate::payload::{Payload, SelfDescribingJson};

use super::{require_non_empty, Event, EventBase};

/// A timing measurement in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    base: EventBase,
    category: String,
    variable: String,
    timing: i64,
    label: Option<String>,
}

impl Timing {
    pub fn builder() -> TimingBuilder {
        TimingBuilder::default()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn timing(&self) -> i64 {
        self.timing
    }
}

impl Event for Timing {
    fn data_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.add("category", &self.category);
        payload.add("variable", &self.variable);
        payload.add_value("timing", Value::from(self.timing));
        if let Some(label) = &self.label {
            payload.add("label", label);
        }
        payload
    }

    fn name(&self) -> &str {
        schemas::TIMING
    }

    fn schema(&self) -> Option<&str> {
        Some(schemas::TIMING)
    }

    fn true_timestamp(&self) -> Option<i64> {
        self.base.true_timestamp
    }

    fn contexts(&self) -> &[SelfDescribingJson] {
        &self.base.contexts
    }
}

/// One-shot builder for [`Timing`].
#[derive(Debug, Clone, Default)]
pub struct TimingBuilder {
    base: EventBase,
    category: Option<String>,
    variable: Option<String>,
    timing: Option<i64>,
    label: Option<String>,
}

impl TimingBuilder {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = Some(variable.into());
        self
    }

    /// The measured time in milliseconds.
    pub fn timing(mut self, timing: i64) -> Self {
        self.timing = Some(timing);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn true_timestamp(mut self, true_timestamp: i64) -> Self {
        self.base.true_timestamp = Some(true_timestamp);
        self
    }

    pub fn context(mut self, context: SelfDescribingJson) -> Self {
        self.base.contexts.push(context);
        self
    }

    /// Required fields are checked in order: category, variable, timing.
    pub fn build(self) -> Result<Timing> {
        let category = require_non_empty("category", self.category)?;
        let variable = require_non_empty("variable", self.variable)?;
        let timing = self.timing.ok_or(TrackerError::MissingField("timing"))?;

        Ok(Timing {
            base: self.base,
            category,
            variable,
            timing,
            label: self.label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use serde_json::json;

    #[test]
    fn test_payload_keys_and_numeric_timing() {
        let event = Timing::builder()
            .category("load")
            .variable("first_paint")
            .timing(420)
            .label("cold start")
            .build()
            .unwrap();

        let payload = event.data_payload();
        assert_eq!(payload.get("category"), Some(&json!("load")));
        assert_eq!(payload.get("variable"), Some(&json!("first_paint")));
        assert_eq!(payload.get("timing"), Some(&json!(420)));
        assert_eq!(payload.get("label"), Some(&json!("cold start")));
    }

    #[test]
    fn test_missing_timing_fails() {
        let err = Timing::builder()
            .category("load")
            .variable("first_paint")
            .build()
            .unwrap_err();
        assert!(matches!(err, TrackerError::MissingField("timing")));
    }

    #[test]
    fn test_check_order_category_first() {
        let err = Timing::builder().timing(1).build().unwrap_err();
        assert!(matches!(err, TrackerError::MissingField("category")));
    }
}
