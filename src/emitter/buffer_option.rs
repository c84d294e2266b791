//! Buffer Option
//!
//! Policy choosing between per-event immediate send and
//! threshold-batched send.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BufferOption {
    /// Flush after every enqueued event.
    Single,
    /// Flush once 10 events are buffered.
    DefaultGroup,
    /// Flush once 25 events are buffered.
    HeavyGroup,
}

impl BufferOption {
    /// The buffer capacity that triggers a flush.
    pub fn code(&self) -> usize {
        match self {
            BufferOption::Single => 1,
            BufferOption::DefaultGroup => 10,
            BufferOption::HeavyGroup => 25,
        }
    }
}
