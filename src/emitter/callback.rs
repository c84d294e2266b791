//! Request Callback
//!
//! Hook invoked by the emitter after each flush cycle, reporting how
//! many events were delivered and how many failed. For host-app
//! observability only; the emitter never uses it for control flow.

pub trait RequestCallback: Send + Sync {
    /// Every event in the cycle was delivered.
    fn on_success(&self, success_count: usize);

    /// At least one event failed. Failed events stay queued for the
    /// next cycle unless they were oversized.
    fn on_failure(&self, success_count: usize, failure_count: usize);
}
