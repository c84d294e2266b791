//! Screen View Event
//!
//! Mobile screen transition, sent as a self-describing event. The
//! screen id is a UUID: generated at build time unless the host app
//! supplies its own.

use uuid::Uuid;

use crate::constants::schemas;
use crate::error::{Result, TrackerError};
use crate::payload::{Payload, SelfDescribingJson};

use super::{require_non_empty, Event, EventBase};

/// A screen view with optional previous-screen linkage.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    base: EventBase,
    name: String,
    id: String,
    screen_type: Option<String>,
    previous_name: Option<String>,
    previous_id: Option<String>,
    previous_type: Option<String>,
    transition_type: Option<String>,
}

impl ScreenView {
    pub fn builder() -> ScreenViewBuilder {
        ScreenViewBuilder::default()
    }

    pub fn screen_name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Event for ScreenView {
    fn data_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.add("name", &self.name);
        payload.add("id", &self.id);
        if let Some(screen_type) = &self.screen_type {
            payload.add("type", screen_type);
        }
        if let Some(previous_name) = &self.previous_name {
            payload.add("previousName", previous_name);
        }
        if let Some(previous_id) = &self.previous_id {
            payload.add("previousId", previous_id);
        }
        if let Some(previous_type) = &self.previous_type {
            payload.add("previousType", previous_type);
        }
        if let Some(transition_type) = &self.transition_type {
            payload.add("transitionType", transition_type);
        }
        payload
    }

    fn name(&self) -> &str {
        schemas::SCREEN_VIEW
    }

    fn schema(&self) -> Option<&str> {
        Some(schemas::SCREEN_VIEW)
    }

    fn true_timestamp(&self) -> Option<i64> {
        self.base.true_timestamp
    }

    fn contexts(&self) -> &[SelfDescribingJson] {
        &self.base.contexts
    }
}

/// One-shot builder for [`ScreenView`].
#[derive(Debug, Clone, Default)]
pub struct ScreenViewBuilder {
    base: EventBase,
    name: Option<String>,
    id: Option<String>,
    screen_type: Option<String>,
    previous_name: Option<String>,
    previous_id: Option<String>,
    previous_type: Option<String>,
    transition_type: Option<String>,
}

impl ScreenViewBuilder {
    /// Human-readable screen name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override the auto-generated screen id. Must be non-empty.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn screen_type(mut self, screen_type: impl Into<String>) -> Self {
        self.screen_type = Some(screen_type.into());
        self
    }

    pub fn previous_name(mut self, previous_name: impl Into<String>) -> Self {
        self.previous_name = Some(previous_name.into());
        self
    }

    pub fn previous_id(mut self, previous_id: impl Into<String>) -> Self {
        self.previous_id = Some(previous_id.into());
        self
    }

    pub fn previous_type(mut self, previous_type: impl Into<String>) -> Self {
        self.previous_type = Some(previous_type.into());
        self
    }

    pub fn transition_type(mut self, transition_type: impl Into<String>) -> Self {
        self.transition_type = Some(transition_type.into());
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

    pub fn build(self) -> Result<ScreenView> {
        let name = require_non_empty("name", self.name)?;
        let id = match self.id {
            Some(id) if id.is_empty() => return Err(TrackerError::EmptyField("id")),
            Some(id) => id,
            None => Uuid::new_v4().to_string(),
        };

        Ok(ScreenView {
            base: self.base,
            name,
            id,
            screen_type: self.screen_type,
            previous_name: self.previous_name,
            previous_id: self.previous_id,
            previous_type: self.previous_type,
            transition_type: self.transition_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use serde_json::json;

    #[test]
    fn test_payload_keys() {
        let event = ScreenView::builder()
            .name("checkout")
            .id("c96d92b8-6e1f-4b4e-9a84-7b4c3a1d5b21")
            .previous_name("basket")
            .transition_type("push")
            .build()
            .unwrap();

        let payload = event.data_payload();
        assert_eq!(payload.get("name"), Some(&json!("checkout")));
        assert_eq!(payload.get("id"), Some(&json!("c96d92b8-6e1f-4b4e-9a84-7b4c3a1d5b21")));
        assert_eq!(payload.get("previousName"), Some(&json!("basket")));
        assert_eq!(payload.get("transitionType"), Some(&json!("push")));
        assert_eq!(event.schema(), Some(crate::constants::schemas::SCREEN_VIEW));
    }

    #[test]
    fn test_id_generated_when_unset() {
        let event = ScreenView::builder().name("home").build().unwrap();
        assert!(!event.id().is_empty());
        // Parseable as a UUID
        assert!(uuid::Uuid::parse_str(event.id()).is_ok());
    }

    #[test]
    fn test_missing_name_fails() {
        let err = ScreenView::builder().build().unwrap_err();
        assert!(matches!(err, TrackerError::MissingField("name")));
    }

    #[test]
    fn test_empty_supplied_id_fails() {
        let err = ScreenView::builder().name("home").id("").build().unwrap_err();
        assert!(matches!(err, TrackerError::EmptyField("id")));
    }
}
