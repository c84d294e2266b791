//! Session
//!
//! Client-session state machine. A session rotates when no event has
//! been tracked within the timeout for the app's current
//! foreground/background state. Each tracked event receives a session
//! context recording the ids, the running index, and the first event
//! of the session.

use std::time::{Duration, Instant};

use serde_json::json;
use uuid::Uuid;

use crate::configuration::SessionConfiguration;
use crate::constants::schemas;
use crate::payload::SelfDescribingJson;

/// Storage mechanism reported in the session context.
const STORAGE_MECHANISM: &str = "MEMORY";

pub struct Session {
    configuration: SessionConfiguration,
    user_id: String,
    current_id: String,
    previous_id: Option<String>,
    index: u32,
    first_event_id: Option<String>,
    last_access: Instant,
    in_background: bool,
}

impl Session {
    pub fn new(configuration: SessionConfiguration) -> Self {
        let session = Self {
            configuration,
            user_id: Uuid::new_v4().to_string(),
            current_id: Uuid::new_v4().to_string(),
            previous_id: None,
            index: 1,
            first_event_id: None,
            last_access: Instant::now(),
            in_background: false,
        };
        log::debug!("Session started: {}", session.current_id);
        session
    }

    pub fn configuration(&self) -> &SessionConfiguration {
        &self.configuration
    }

    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Host-signaled foreground/background transition. Only affects
    /// which timeout applies; rotation happens on the next event.
    pub fn set_background(&mut self, in_background: bool) {
        self.in_background = in_background;
    }

    /// Account for a tracked event: rotate if the session timed out,
    /// record the session's first event id, and return the session
    /// context to attach.
    pub fn update_and_context(&mut self, event_id: &str) -> SelfDescribingJson {
        let elapsed = self.last_access.elapsed();
        self.update_with_elapsed(event_id, elapsed)
    }

    fn update_with_elapsed(&mut self, event_id: &str, elapsed: Duration) -> SelfDescribingJson {
        let timeout = if self.in_background {
            self.configuration.background_timeout()
        } else {
            self.configuration.foreground_timeout()
        };

        if elapsed > timeout {
            self.rotate();
        }
        self.last_access = Instant::now();

        if self.first_event_id.is_none() {
            self.first_event_id = Some(event_id.to_string());
        }

        SelfDescribingJson::new(
            schemas::CLIENT_SESSION,
            json!({
                "userId": &self.user_id,
                "sessionId": &self.current_id,
                "previousSessionId": &self.previous_id,
                "sessionIndex": self.index,
                "firstEventId": &self.first_event_id,
                "storageMechanism": STORAGE_MECHANISM,
            }),
        )
    }

    fn rotate(&mut self) {
        self.previous_id = Some(self.current_id.clone());
        self.current_id = Uuid::new_v4().to_string();
        self.index += 1;
        self.first_event_id = None;
        log::debug!(
            "Session rotated: {} (index {})",
            self.current_id,
            self.index
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(foreground_secs: u64) -> SessionConfiguration {
        SessionConfiguration::new(
            Duration::from_secs(foreground_secs),
            Duration::from_secs(foreground_secs),
        )
    }

    #[test]
    fn test_first_event_id_recorded_once() {
        let mut session = Session::new(config(1800));
        let first = session.update_and_context("event-1");
        let second = session.update_and_context("event-2");

        assert_eq!(first.data["firstEventId"], "event-1");
        assert_eq!(second.data["firstEventId"], "event-1");
        assert_eq!(second.data["sessionIndex"], 1);
        assert_eq!(second.data["previousSessionId"], serde_json::Value::Null);
    }

    #[test]
    fn test_rotation_after_timeout() {
        let mut session = Session::new(config(1800));
        let before = session.update_and_context("event-1");
        let old_id = before.data["sessionId"].as_str().unwrap().to_string();

        let after = session.update_with_elapsed("event-2", Duration::from_secs(3600));

        assert_eq!(after.data["sessionIndex"], 2);
        assert_eq!(after.data["previousSessionId"], old_id.as_str());
        assert_ne!(after.data["sessionId"], old_id.as_str());
        // New session, new first event
        assert_eq!(after.data["firstEventId"], "event-2");
    }

    #[test]
    fn test_background_timeout_applies() {
        let mut session = Session::new(SessionConfiguration::new(
            Duration::from_secs(3600),
            Duration::from_secs(60),
        ));
        session.update_and_context("event-1");
        session.set_background(true);

        // 10 minutes exceeds only the background timeout.
        let context = session.update_with_elapsed("event-2", Duration::from_secs(600));
        assert_eq!(context.data["sessionIndex"], 2);
    }

    #[test]
    fn test_no_rotation_within_timeout() {
        let mut session = Session::new(config(1800));
        session.update_and_context("event-1");
        let context = session.update_with_elapsed("event-2", Duration::from_secs(60));
        assert_eq!(context.data["sessionIndex"], 1);
    }

    #[test]
    fn test_real_clock_rotation() {
        let mut session = Session::new(SessionConfiguration::new(
            Duration::from_millis(10),
            Duration::from_millis(10),
        ));
        session.update_and_context("event-1");
        std::thread::sleep(Duration::from_millis(25));
        let context = session.update_and_context("event-2");
        assert_eq!(context.data["sessionIndex"], 2);
    }
}
