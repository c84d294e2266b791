//! Session Configuration
//!
//! Inactivity timeouts governing when the session context rotates.
//! A new session starts when no event has been tracked within the
//! timeout for the app's current foreground/background state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfiguration {
    foreground_timeout: Duration,
    background_timeout: Duration,
}

impl SessionConfiguration {
    /// Timeouts for app inactivity in foreground and background.
    pub fn new(foreground_timeout: Duration, background_timeout: Duration) -> Self {
        Self {
            foreground_timeout,
            background_timeout,
        }
    }

    pub fn foreground_timeout(&self) -> Duration {
        self.foreground_timeout
    }

    pub fn set_foreground_timeout(&mut self, foreground_timeout: Duration) {
        self.foreground_timeout = foreground_timeout;
    }

    pub fn background_timeout(&self) -> Duration {
        self.background_timeout
    }

    pub fn set_background_timeout(&mut self, background_timeout: Duration) {
        self.background_timeout = background_timeout;
    }

    /// Field-wise duplication. Mutating the copy never affects the
    /// original.
    pub fn copy(&self) -> Self {
        Self {
            foreground_timeout: self.foreground_timeout,
            background_timeout: self.background_timeout,
        }
    }
}

impl Default for SessionConfiguration {
    /// 30 minutes foreground, 30 minutes background.
    fn default() -> Self {
        Self::new(Duration::from_secs(1800), Duration::from_secs(1800))
    }
}
