//! Page View Event

use crate::constants::{events, params};
use crate::error::Result;
use crate::payload::{Payload, SelfDescribingJson};

use super::{require_non_empty, Event, EventBase};

/// A web-style page view. The page URL is required.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    base: EventBase,
    page_url: String,
    page_title: Option<String>,
    referrer: Option<String>,
}

impl PageView {
    pub fn builder() -> PageViewBuilder {
        PageViewBuilder::default()
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }
}

impl Event for PageView {
    fn data_payload(&self) -> Payload {
        let mut payload = Payload::new();
        payload.add(params::PAGE_URL, &self.page_url);
        if let Some(page_title) = &self.page_title {
            payload.add(params::PAGE_TITLE, page_title);
        }
        if let Some(referrer) = &self.referrer {
            payload.add(params::PAGE_REFR, referrer);
        }
        payload
    }

    fn name(&self) -> &str {
        events::PAGE_VIEW
    }

    fn true_timestamp(&self) -> Option<i64> {
        self.base.true_timestamp
    }

    fn contexts(&self) -> &[SelfDescribingJson] {
        &self.base.contexts
    }
}

/// One-shot builder for [`PageView`].
#[derive(Debug, Clone, Default)]
pub struct PageViewBuilder {
    base: EventBase,
    page_url: Option<String>,
    page_title: Option<String>,
    referrer: Option<String>,
}

impl PageViewBuilder {
    pub fn page_url(mut self, page_url: impl Into<String>) -> Self {
        self.page_url = Some(page_url.into());
        self
    }

    pub fn page_title(mut self, page_title: impl Into<String>) -> Self {
        self.page_title = Some(page_title.into());
        self
    }

    pub fn referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
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

    pub fn build(self) -> Result<PageView> {
        let page_url = require_non_empty("page url", self.page_url)?;

        Ok(PageView {
            base: self.base,
            page_url,
            page_title: self.page_title,
            referrer: self.referrer,
        })
    }
}
