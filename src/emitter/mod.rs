//! Emitter Module
//!
//! Store-and-forward delivery of tracked events to the collector.
//!
//! ## Structure
//! - `buffer_option.rs` - Instant vs. threshold-batched flushing
//! - `config.rs` - Live settings record read each flush cycle
//! - `callback.rs` - Per-cycle success/failure reporting hook
//! - `store.rs` - In-memory pending event FIFO
//! - `client.rs` - Collector HTTP client (GET single / POST batch)
//! - `send.rs` - Batch splitting and bounded-concurrency flushing

pub mod buffer_option;
pub mod callback;
pub mod client;
pub mod config;
pub mod send;
pub mod store;

pub use buffer_option::BufferOption;
pub use callback::RequestCallback;
pub use client::{CollectorClient, HttpMethod};
pub use config::EmitterConfiguration;
pub use send::Emitter;
pub use store::{InMemoryEventStore, StoredEvent};
