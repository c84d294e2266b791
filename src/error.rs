//! Error Handling
//!
//! Single crate-level error enum. Construction errors surface
//! synchronously from `build()`; network errors surface from the emitter.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Error, Debug)]
pub enum TrackerError {
    /// A required event field was never set on the builder.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A required string field was set to the empty string.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// Self-describing event data was not a JSON object.
    #[error("self-describing event data must be a JSON object")]
    InvalidEventData,

    /// Transport-level failure talking to the collector.
    #[error("network error: {0}")]
    Network(String),

    /// The collector answered with a non-2xx status.
    #[error("collector rejected request: status {0}")]
    Collector(u16),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
