//! Structured Event
//!
//! The classic category/action click event. Category and action are
//! required and must be non-empty; everything else is optional.

use crate::constants::{events, params};
use crate::error::Result;
use crate::payload::{Payload, SelfDescribingJson};

use super::{require_non_empty, Event, EventBase};

/// A structured (category/action) event.
#[derive(Debug, Clone, PartialEq)]
pub struct Structured {
    base: EventBase,
    category: String,
    action: String,
    label: Option<String>,
    property: Option<String>,
    value: Option<f64>,
    page_url: Option<String>,
    referrer: Option<String>,
}

impl Structured {
    pub fn builder() -> StructuredBuilder {
        StructuredBuilder::default()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

impl Event for Structured {
    fn data_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.add(params::SE_CATEGORY, &self.category);
        payload.add(params::SE_ACTION, &self.action);
        if let Some(label) = &self.label {
            payload.add(params::SE_LABEL, label);
        }
        if let Some(property) = &self.property {
            payload.add(params::SE_PROPERTY, property);
        }
        if let Some(value) = self.value {
            // Decimal string, not a JSON number. The collector contract
            // expects se_va as a string parameter.
            payload.add(params::SE_VALUE, &value.to_string());
        }
        if let Some(page_url) = &self.page_url {
            payload.add(params::PAGE_URL, page_url);
        }
        if let Some(referrer) = &self.referrer {
            payload.add(params::PAGE_REFR, referrer);
        }
        payload
    }

    fn name(&self) -> &str {
        events::STRUCTURED
    }

    fn true_timestamp(&self) -> Option<i64> {
        self.base.true_timestamp
    }

    fn contexts(&self) -> &[SelfDescribingJson] {
        &self.base.contexts
    }
}

/// One-shot builder for [`Structured`].
#[derive(Debug, Clone, Default)]
pub struct StructuredBuilder {
    base: EventBase,
    category: Option<String>,
    action: Option<String>,
    label: Option<String>,
    property: Option<String>,
    value: Option<f64>,
    page_url: Option<String>,
    referrer: Option<String>,
}

impl StructuredBuilder {
    /// Category of the event.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The action itself.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// The object the action is performed on.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Property associated with either the action or the object.
    pub fn property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    /// A value associated with the user action.
    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// The current page URL.
    pub fn page_url(mut self, page_url: impl Into<String>) -> Self {
        self.page_url = Some(page_url.into());
        self
    }

    /// The page URL we arrived from.
    pub fn referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
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

    /// Validate required fields (category first, then action) and build
    /// the immutable event.
    pub fn build(self) -> Result<Structured> {
        let category = require_non_empty("category", self.category)?;
        let action = require_non_empty("action", self.action)?;

        Ok(Structured {
            base: self.base,
            category,
            action,
            label: self.label,
            property: self.property,
            value: self.value,
            page_url: self.page_url,
            referrer: self.referrer,
        })
    }
}
