//! Event Module
//!
//! Typed event builders producing wire-ready payloads.
//!
//! ## Structure
//! - `structured.rs` - Structured (category/action) events
//! - `self_describing.rs` - Custom schema'd events
//! - `screen_view.rs` - Mobile screen transitions
//! - `page_view.rs` - Web-style page views
//! - `timing.rs` - User timing measurements
//!
//! Every builder is a one-shot accumulator: fluent setters, then
//! `build()` validates required fields and moves them into an immutable
//! event. A failed `build()` never yields a partially-valid event.

pub mod page_view;
pub mod screen_view;
pub mod self_describing;
pub mod structured;
pub mod timing;

pub use page_view::{PageView, PageViewBuilder};
pub use screen_view::{ScreenView, ScreenViewBuilder};
pub use self_describing::{SelfDescribing, SelfDescribingBuilder};
pub use structured::{Structured, StructuredBuilder};
pub use timing::{Timing, TimingBuilder};

use crate::error::{Result, TrackerError};
use crate::payload::{Payload, SelfDescribingJson};

// ============================================================================
// EVENT TRAIT
// ============================================================================

/// An immutable, validated unit of user/app behavior ready for payload
/// extraction.
pub trait Event {
    /// The event's own key-value data. Pure and deterministic; required
    /// fields are always present, optional fields present iff set.
    fn data_payload(&self) -> Payload;

    /// Fixed event-name constant: a short code (`se`, `pv`) for primitive
    /// events, the schema URI for self-describing ones. Used downstream
    /// for routing and validation, never computed.
    fn name(&self) -> &str;

    /// Schema URI for self-describing variants, `None` for primitives.
    /// The tracker wraps self-describing data in the unstruct envelope.
    fn schema(&self) -> Option<&str> {
        None
    }

    /// Application-asserted event time, epoch millis. Distinct from the
    /// device timestamp the tracker stamps at track time.
    fn true_timestamp(&self) -> Option<i64>;

    /// Custom contexts to merge at send time, in attachment order.
    fn contexts(&self) -> &[SelfDescribingJson];
}

// ============================================================================
// SHARED BUILDER BASE
// ============================================================================

/// Optional metadata attachable to every event variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventBase {
    pub(crate) true_timestamp: Option<i64>,
    pub(crate) contexts: Vec<SelfDescribingJson>,
}

/// Validate a required string field: it must have been set, and must not
/// be the empty string. Emptiness is checked literally, not trimmed.
pub(crate) fn require_non_empty(field: &'static str, value: Option<String>) -> Result<String> {
    let value = value.ok_or(TrackerError::MissingField(field))?;
    if value.is_empty() {
        return Err(TrackerError::EmptyField(field));
    }
    Ok(value)
}
