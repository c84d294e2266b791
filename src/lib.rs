//! Beacon Tracker
//!
//! Client-side analytics instrumentation. Host apps build typed events
//! (structured clicks, self-describing custom events, screen views,
//! page views, timings), a [`Tracker`] stamps the wire envelope and
//! merges subject/session data, and an [`Emitter`] buffers and
//! delivers the payloads to a collector over HTTP.
//!
//! ## Usage
//! ```ignore
//! use beacon_tracker::{
//!     BufferOption, Emitter, EmitterConfiguration, HttpMethod, Structured, Tracker,
//! };
//!
//! let emitter = Emitter::new(
//!     "https://collector.example.com",
//!     HttpMethod::Post,
//!     EmitterConfiguration::new().with_buffer_option(BufferOption::DefaultGroup),
//! );
//! let tracker = Tracker::new("ns-main", "my-app", emitter);
//!
//! let event = Structured::builder()
//!     .category("shop")
//!     .action("add-to-basket")
//!     .value(2.0)
//!     .build()?;
//! tracker.track(&event).await;
//! ```

pub mod configuration;
pub mod constants;
pub mod emitter;
pub mod error;
pub mod event;
pub mod payload;
pub mod tracker;

// Re-export the main types and functions
pub use configuration::{SessionConfiguration, Size, SubjectConfiguration};
pub use emitter::{
    BufferOption, CollectorClient, Emitter, EmitterConfiguration, HttpMethod, InMemoryEventStore,
    RequestCallback,
};
pub use error::{Result, TrackerError};
pub use event::{Event, PageView, ScreenView, SelfDescribing, Structured, Timing};
pub use payload::{Payload, SelfDescribingJson};
pub use tracker::{Session, Subject, Tracker};
