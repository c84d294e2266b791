//! Emitter Configuration
//!
//! Settings record governing how buffered events are flushed.
//! Constructed once at tracker setup; the host app may mutate it at
//! runtime, and the emitter reads it at the start of every flush
//! cycle. Individual getter/setter calls are effectively instantaneous;
//! no cross-field atomicity is promised or required.

use std::sync::Arc;

use crate::constants::defaults;

use super::buffer_option::BufferOption;
use super::callback::RequestCallback;

#[derive(Clone)]
pub struct EmitterConfiguration {
    buffer_option: BufferOption,
    emit_range: usize,
    byte_limit_get: u64,
    byte_limit_post: u64,
    thread_pool_size: usize,
    request_callback: Option<Arc<dyn RequestCallback>>,
}

impl EmitterConfiguration {
    pub fn new() -> Self {
        Self {
            buffer_option: BufferOption::Single,
            emit_range: defaults::EMIT_RANGE,
            byte_limit_get: defaults::BYTE_LIMIT_GET,
            byte_limit_post: defaults::BYTE_LIMIT_POST,
            thread_pool_size: defaults::THREAD_POOL_SIZE,
            request_callback: None,
        }
    }

    // Fluent setup methods

    pub fn with_buffer_option(mut self, buffer_option: BufferOption) -> Self {
        self.set_buffer_option(buffer_option);
        self
    }

    pub fn with_emit_range(mut self, emit_range: usize) -> Self {
        self.set_emit_range(emit_range);
        self
    }

    pub fn with_byte_limit_get(mut self, byte_limit_get: u64) -> Self {
        self.set_byte_limit_get(byte_limit_get);
        self
    }

    pub fn with_byte_limit_post(mut self, byte_limit_post: u64) -> Self {
        self.set_byte_limit_post(byte_limit_post);
        self
    }

    pub fn with_thread_pool_size(mut self, thread_pool_size: usize) -> Self {
        self.set_thread_pool_size(thread_pool_size);
        self
    }

    pub fn with_request_callback(mut self, request_callback: Arc<dyn RequestCallback>) -> Self {
        self.request_callback = Some(request_callback);
        self
    }

    // Getters and setters

    /// Whether the buffer sends events instantly or after reaching its
    /// capacity threshold.
    pub fn buffer_option(&self) -> BufferOption {
        self.buffer_option
    }

    pub fn set_buffer_option(&mut self, buffer_option: BufferOption) {
        self.buffer_option = buffer_option;
    }

    /// Maximum number of events collected from the store per request
    /// cycle.
    pub fn emit_range(&self) -> usize {
        self.emit_range
    }

    /// Panics if `emit_range` is zero.
    pub fn set_emit_range(&mut self, emit_range: usize) {
        assert!(emit_range > 0, "emit_range must be positive");
        self.emit_range = emit_range;
    }

    /// Maximum bytes allowed in a GET request payload.
    pub fn byte_limit_get(&self) -> u64 {
        self.byte_limit_get
    }

    pub fn set_byte_limit_get(&mut self, byte_limit_get: u64) {
        self.byte_limit_get = byte_limit_get;
    }

    /// Maximum bytes allowed in a POST request payload.
    pub fn byte_limit_post(&self) -> u64 {
        self.byte_limit_post
    }

    pub fn set_byte_limit_post(&mut self, byte_limit_post: u64) {
        self.byte_limit_post = byte_limit_post;
    }

    /// Upper bound on concurrent in-flight requests. Exposed as a value;
    /// the emitter honors it per flush cycle.
    pub fn thread_pool_size(&self) -> usize {
        self.thread_pool_size
    }

    /// Panics if `thread_pool_size` is zero.
    pub fn set_thread_pool_size(&mut self, thread_pool_size: usize) {
        assert!(thread_pool_size > 0, "thread_pool_size must be positive");
        self.thread_pool_size = thread_pool_size;
    }

    /// Callback invoked after each flush cycle.
    pub fn request_callback(&self) -> Option<Arc<dyn RequestCallback>> {
        self.request_callback.clone()
    }

    pub fn set_request_callback(&mut self, request_callback: Option<Arc<dyn RequestCallback>>) {
        self.request_callback = request_callback;
    }

    /// Field-wise shallow duplication (the callback handle is shared).
    /// Mutating the copy never affects the original.
    pub fn copy(&self) -> Self {
        Self {
            buffer_option: self.buffer_option,
            emit_range: self.emit_range,
            byte_limit_get: self.byte_limit_get,
            byte_limit_post: self.byte_limit_post,
            thread_pool_size: self.thread_pool_size,
            request_callback: self.request_callback.clone(),
        }
    }
}

impl Default for EmitterConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EmitterConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmitterConfiguration")
            .field("buffer_option", &self.buffer_option)
            .field("emit_range", &self.emit_range)
            .field("byte_limit_get", &self.byte_limit_get)
            .field("byte_limit_post", &self.byte_limit_post)
            .field("thread_pool_size", &self.thread_pool_size)
            .field("request_callback", &self.request_callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingCallback {
        successes: AtomicUsize,
    }

    impl RequestCallback for CountingCallback {
        fn on_success(&self, success_count: usize) {
            self.successes.fetch_add(success_count, Ordering::SeqCst);
        }

        fn on_failure(&self, _success_count: usize, _failure_count: usize) {}
    }

    #[test]
    fn test_defaults() {
        let config = EmitterConfiguration::new();
        assert_eq!(config.buffer_option(), BufferOption::Single);
        assert_eq!(config.emit_range(), 150);
        assert_eq!(config.byte_limit_get(), 40_000);
        assert_eq!(config.byte_limit_post(), 40_000);
        assert_eq!(config.thread_pool_size(), 2);
        assert!(config.request_callback().is_none());
    }

    #[test]
    fn test_setter_getter_round_trip() {
        let mut config = EmitterConfiguration::new();
        config.set_buffer_option(BufferOption::HeavyGroup);
        config.set_emit_range(250);
        config.set_byte_limit_get(52_000);
        config.set_byte_limit_post(128_000);
        config.set_thread_pool_size(8);

        assert_eq!(config.buffer_option(), BufferOption::HeavyGroup);
        assert_eq!(config.emit_range(), 250);
        assert_eq!(config.byte_limit_get(), 52_000);
        assert_eq!(config.byte_limit_post(), 128_000);
        assert_eq!(config.thread_pool_size(), 8);
    }

    #[test]
    fn test_callback_round_trip() {
        let callback = Arc::new(CountingCallback {
            successes: AtomicUsize::new(0),
        });
        let config = EmitterConfiguration::new().with_request_callback(callback.clone());

        let held = config.request_callback().unwrap();
        held.on_success(3);
        assert_eq!(callback.successes.load(Ordering::SeqCst), 3);
    }

    #[test]
    #[should_panic(expected = "emit_range must be positive")]
    fn test_zero_emit_range_panics() {
        EmitterConfiguration::new().with_emit_range(0);
    }

    #[test]
    #[should_panic(expected = "thread_pool_size must be positive")]
    fn test_zero_thread_pool_panics() {
        EmitterConfiguration::new().with_thread_pool_size(0);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = EmitterConfiguration::new().with_emit_range(100);
        let mut copy = original.copy();
        copy.set_emit_range(10);

        assert_eq!(original.emit_range(), 100);
        assert_eq!(copy.emit_range(), 10);
    }
}
