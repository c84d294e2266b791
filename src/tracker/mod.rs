//! Tracker Module
//!
//! The front door of the SDK: takes a built event, stamps the wire
//! envelope, merges subject and session data, and hands the result to
//! the emitter.
//!
//! ## Structure
//! - `subject.rs` - User/environment payload snapshot
//! - `session.rs` - Client-session rotation and context

pub mod session;
pub mod subject;

pub use session::Session;
pub use subject::Subject;

use chrono::Utc;
use parking_lot::Mutex;
use serde_json::Value;
use uuid::Uuid;

use crate::configuration::{SessionConfiguration, SubjectConfiguration};
use crate::constants::{events, params, schemas, DEFAULT_PLATFORM, TRACKER_VERSION};
use crate::emitter::Emitter;
use crate::event::Event;
use crate::payload::{Payload, SelfDescribingJson};

/// Assembles the wire envelope around built events and queues them for
/// delivery.
pub struct Tracker {
    namespace: String,
    app_id: String,
    platform: String,
    emitter: Emitter,
    subject: Option<Subject>,
    session: Option<Mutex<Session>>,
}

impl Tracker {
    pub fn new(namespace: impl Into<String>, app_id: impl Into<String>, emitter: Emitter) -> Self {
        Self {
            namespace: namespace.into(),
            app_id: app_id.into(),
            platform: DEFAULT_PLATFORM.to_string(),
            emitter,
            subject: None,
            session: None,
        }
    }

    /// Attach a subject whose payload is merged into every event.
    pub fn with_subject(mut self, configuration: SubjectConfiguration) -> Self {
        self.subject = Some(Subject::new(configuration));
        self
    }

    /// Enable session tracking with the given timeouts.
    pub fn with_session(mut self, configuration: SessionConfiguration) -> Self {
        self.session = Some(Mutex::new(Session::new(configuration)));
        self
    }

    /// Override the platform code sent under `p`.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Signal a foreground/background transition to the session layer.
    pub fn set_background(&self, in_background: bool) {
        if let Some(session) = &self.session {
            session.lock().set_background(in_background);
        }
    }

    /// Stamp the envelope, merge subject and session data, and queue
    /// the event. Returns the event id.
    pub async fn track(&self, event: &dyn Event) -> String {
        let event_id = Uuid::new_v4().to_string();

        let mut payload = Payload::new();
        payload.add(params::EID, &event_id);
        payload.add(params::TIMESTAMP, &Utc::now().timestamp_millis().to_string());
        if let Some(true_timestamp) = event.true_timestamp() {
            payload.add(params::TRUE_TIMESTAMP, &true_timestamp.to_string());
        }
        payload.add(params::TRACKER_VERSION, TRACKER_VERSION);
        payload.add(params::NAMESPACE, &self.namespace);
        payload.add(params::APP_ID, &self.app_id);
        payload.add(params::PLATFORM, &self.platform);

        match event.schema() {
            Some(schema) => {
                // Self-describing events travel inside the unstruct
                // envelope under ue_pr.
                payload.add(params::EVENT, events::UNSTRUCTURED);
                let wrapped = SelfDescribingJson::new(
                    schemas::UNSTRUCT_EVENT,
                    SelfDescribingJson::new(schema, event.data_payload().to_json()).to_value(),
                );
                payload.add(params::UNSTRUCTURED, &wrapped.to_string());
            }
            None => {
                payload.add(params::EVENT, event.name());
                payload.merge(event.data_payload());
            }
        }

        if let Some(subject) = &self.subject {
            payload.merge(subject.payload());
        }

        let mut contexts: Vec<SelfDescribingJson> = event.contexts().to_vec();
        if let Some(session) = &self.session {
            contexts.push(session.lock().update_and_context(&event_id));
        }
        if !contexts.is_empty() {
            let entries: Vec<Value> = contexts.iter().map(|context| context.to_value()).collect();
            let envelope = SelfDescribingJson::new(schemas::CONTEXTS, Value::Array(entries));
            payload.add(params::CONTEXT, &envelope.to_string());
        }

        log::debug!("Tracking event {} ({})", event_id, event.name());
        self.emitter.add(payload).await;
        event_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Size;
    use crate::emitter::{BufferOption, EmitterConfiguration, HttpMethod};
    use crate::event::{ScreenView, Structured};
    use std::time::Duration;

    /// A tracker buffering heavily against a dead endpoint: tracked
    /// events stay in the store for inspection.
    fn buffering_tracker() -> Tracker {
        let emitter = Emitter::new(
            "http://127.0.0.1:9",
            HttpMethod::Post,
            EmitterConfiguration::new().with_buffer_option(BufferOption::HeavyGroup),
        );
        Tracker::new("ns-main", "app-test", emitter)
    }

    fn structured() -> Structured {
        Structured::builder()
            .category("shop")
            .action("add-to-basket")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_envelope_required_fields() {
        let tracker = buffering_tracker();
        let event_id = tracker.track(&structured()).await;

        let stored = tracker.emitter().store().peek(1);
        assert_eq!(stored.len(), 1);
        let payload = &stored[0].payload;

        assert_eq!(payload.get("e"), Some(&serde_json::json!("se")));
        assert_eq!(payload.get("eid"), Some(&serde_json::json!(event_id.as_str())));
        assert_eq!(payload.get("tna"), Some(&serde_json::json!("ns-main")));
        assert_eq!(payload.get("aid"), Some(&serde_json::json!("app-test")));
        assert_eq!(payload.get("p"), Some(&serde_json::json!("mob")));
        assert!(payload.contains_key("dtm"));
        assert!(payload.contains_key("tv"));
        assert_eq!(payload.get("se_ca"), Some(&serde_json::json!("shop")));
        assert!(!payload.contains_key("ttm"));
    }

    #[tokio::test]
    async fn test_true_timestamp_stamped() {
        let tracker = buffering_tracker();
        let event = Structured::builder()
            .category("shop")
            .action("checkout")
            .true_timestamp(123456789)
            .build()
            .unwrap();
        tracker.track(&event).await;

        let stored = tracker.emitter().store().peek(1);
        assert_eq!(stored[0].payload.get("ttm"), Some(&serde_json::json!("123456789")));
    }

    #[tokio::test]
    async fn test_subject_merged() {
        let emitter = Emitter::new(
            "http://127.0.0.1:9",
            HttpMethod::Post,
            EmitterConfiguration::new().with_buffer_option(BufferOption::HeavyGroup),
        );
        let tracker = Tracker::new("ns-main", "app-test", emitter).with_subject(
            SubjectConfiguration::new()
                .with_user_id("u-1001")
                .with_screen_resolution(Size::new(750, 1334)),
        );

        tracker.track(&structured()).await;
        let payload = &tracker.emitter().store().peek(1)[0].payload;
        assert_eq!(payload.get("uid"), Some(&serde_json::json!("u-1001")));
        assert_eq!(payload.get("res"), Some(&serde_json::json!("750x1334")));
    }

    #[tokio::test]
    async fn test_self_describing_wrapped() {
        let tracker = buffering_tracker();
        let event = ScreenView::builder().name("checkout").build().unwrap();
        tracker.track(&event).await;

        let payload = &tracker.emitter().store().peek(1)[0].payload;
        assert_eq!(payload.get("e"), Some(&serde_json::json!("ue")));
        assert!(!payload.contains_key("name"));

        let wrapped: serde_json::Value =
            serde_json::from_str(payload.get("ue_pr").unwrap().as_str().unwrap()).unwrap();
        assert_eq!(wrapped["schema"], crate::constants::schemas::UNSTRUCT_EVENT);
        assert_eq!(wrapped["data"]["schema"], crate::constants::schemas::SCREEN_VIEW);
        assert_eq!(wrapped["data"]["data"]["name"], "checkout");
    }

    #[tokio::test]
    async fn test_contexts_and_session_in_envelope() {
        let emitter = Emitter::new(
            "http://127.0.0.1:9",
            HttpMethod::Post,
            EmitterConfiguration::new().with_buffer_option(BufferOption::HeavyGroup),
        );
        let tracker = Tracker::new("ns-main", "app-test", emitter).with_session(
            SessionConfiguration::new(Duration::from_secs(1800), Duration::from_secs(1800)),
        );

        let event = Structured::builder()
            .category("ui")
            .action("tap")
            .context(SelfDescribingJson::new(
                "iglu:com.acme/screen_meta/jsonschema/1-0-0",
                serde_json::json!({"dark_mode": true}),
            ))
            .build()
            .unwrap();
        let event_id = tracker.track(&event).await;

        let payload = &tracker.emitter().store().peek(1)[0].payload;
        let envelope: serde_json::Value =
            serde_json::from_str(payload.get("co").unwrap().as_str().unwrap()).unwrap();

        assert_eq!(envelope["schema"], crate::constants::schemas::CONTEXTS);
        let entries = envelope["data"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        // Custom context first, session context appended after.
        assert_eq!(entries[0]["schema"], "iglu:com.acme/screen_meta/jsonschema/1-0-0");
        assert_eq!(entries[1]["schema"], crate::constants::schemas::CLIENT_SESSION);
        assert_eq!(entries[1]["data"]["firstEventId"], event_id.as_str());
    }

    #[tokio::test]
    async fn test_event_id_is_uuid() {
        let tracker = buffering_tracker();
        let event_id = tracker.track(&structured()).await;
        assert!(Uuid::parse_str(&event_id).is_ok());
    }
}
