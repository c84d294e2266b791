//! Emitter
//!
//! Drains the pending event store per the live configuration: peeks up
//! to `emit_range` records, splits them so no request exceeds the
//! active method's byte limit, sends with at most `thread_pool_size`
//! requests in flight, and removes records only after a successful
//! send. Failed records stay queued; oversized records are dropped
//! after their lone attempt either way.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::task::JoinSet;

use crate::error::Result;
use crate::payload::Payload;

use super::client::{CollectorClient, HttpMethod};
use super::config::EmitterConfiguration;
use super::store::{InMemoryEventStore, StoredEvent};

/// Approximate serialized size of the POST envelope around a batch.
const POST_WRAPPER_BYTES: u64 = 88;

/// One HTTP request's worth of records.
#[derive(Debug, Clone, PartialEq)]
struct RequestBatch {
    ids: Vec<u64>,
    payloads: Vec<Payload>,
    /// A single record too large for the byte limit. Sent alone and
    /// removed from the store regardless of outcome.
    oversize: bool,
}

/// Store-and-forward sender for wire-ready payloads.
pub struct Emitter {
    config: Arc<RwLock<EmitterConfiguration>>,
    store: Arc<InMemoryEventStore>,
    client: CollectorClient,
    method: HttpMethod,
}

impl Emitter {
    pub fn new(endpoint: &str, method: HttpMethod, configuration: EmitterConfiguration) -> Self {
        Self {
            config: Arc::new(RwLock::new(configuration)),
            store: Arc::new(InMemoryEventStore::new()),
            client: CollectorClient::new(endpoint),
            method,
        }
    }

    /// Shared handle to the live configuration. The host app may mutate
    /// it at any time; the emitter reads it at the start of each flush
    /// cycle, so a slightly stale value is possible and tolerated.
    pub fn configuration(&self) -> Arc<RwLock<EmitterConfiguration>> {
        Arc::clone(&self.config)
    }

    pub fn store(&self) -> &InMemoryEventStore {
        &self.store
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Number of events awaiting delivery.
    pub fn pending(&self) -> usize {
        self.store.size()
    }

    /// Queue a payload, flushing once the buffer option's threshold is
    /// reached.
    pub async fn add(&self, payload: Payload) {
        self.store.add(payload);
        let threshold = self.config.read().buffer_option().code();
        if self.store.size() >= threshold {
            self.flush().await;
        }
    }

    /// Drain one cycle's worth of events. Reports counts through the
    /// request callback if one is configured.
    pub async fn flush(&self) {
        let (emit_range, byte_limit, pool_size, callback) = {
            let config = self.config.read();
            let byte_limit = match self.method {
                HttpMethod::Get => config.byte_limit_get(),
                HttpMethod::Post => config.byte_limit_post(),
            };
            (
                config.emit_range(),
                byte_limit,
                config.thread_pool_size(),
                config.request_callback(),
            )
        };

        let records = self.store.peek(emit_range);
        if records.is_empty() {
            return;
        }

        let mut queue: VecDeque<RequestBatch> = group_records(&records, self.method, byte_limit).into();
        log::debug!(
            "Emitter: flushing {} events in {} requests",
            records.len(),
            queue.len()
        );

        let mut success_count = 0usize;
        let mut failure_count = 0usize;

        let mut join_set: JoinSet<(RequestBatch, Result<u16>)> = JoinSet::new();
        while join_set.len() < pool_size {
            match queue.pop_front() {
                Some(batch) => self.spawn_send(&mut join_set, batch),
                None => break,
            }
        }

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((batch, Ok(status))) => {
                    self.store.remove(&batch.ids);
                    success_count += batch.ids.len();
                    log::debug!("Emitter: sent {} events (status {})", batch.ids.len(), status);
                }
                Ok((batch, Err(e))) => {
                    failure_count += batch.ids.len();
                    if batch.oversize {
                        self.store.remove(&batch.ids);
                        log::warn!("Emitter: dropping oversized event after failed attempt: {}", e);
                    } else {
                        log::warn!(
                            "Emitter: request failed, {} events stay queued: {}",
                            batch.ids.len(),
                            e
                        );
                    }
                }
                Err(e) => {
                    log::error!("Emitter: send task failed to complete: {}", e);
                }
            }
            if let Some(batch) = queue.pop_front() {
                self.spawn_send(&mut join_set, batch);
            }
        }

        if let Some(callback) = callback {
            if failure_count == 0 {
                callback.on_success(success_count);
            } else {
                callback.on_failure(success_count, failure_count);
            }
        }
    }

    fn spawn_send(&self, join_set: &mut JoinSet<(RequestBatch, Result<u16>)>, batch: RequestBatch) {
        let client = self.client.clone();
        let method = self.method;
        join_set.spawn(async move {
            let result = match method {
                HttpMethod::Get => client.send_get(&batch.payloads[0]).await,
                HttpMethod::Post => client.send_post(&batch.payloads).await,
            };
            (batch, result)
        });
    }
}

/// Split a cycle's records into per-request batches honoring the byte
/// limit. GET sends one event per request; POST packs events until the
/// envelope would exceed the limit. A single event already over the
/// limit becomes its own `oversize` batch.
fn group_records(records: &[StoredEvent], method: HttpMethod, byte_limit: u64) -> Vec<RequestBatch> {
    match method {
        HttpMethod::Get => records
            .iter()
            .map(|record| RequestBatch {
                ids: vec![record.id],
                payloads: vec![record.payload.clone()],
                oversize: record.payload.byte_size() > byte_limit,
            })
            .collect(),
        HttpMethod::Post => {
            let mut batches = Vec::new();
            let mut current = RequestBatch {
                ids: Vec::new(),
                payloads: Vec::new(),
                oversize: false,
            };
            let mut current_bytes = POST_WRAPPER_BYTES;

            for record in records {
                let size = record.payload.byte_size();
                if size + POST_WRAPPER_BYTES > byte_limit {
                    // Too large for any batch: lone request, dropped
                    // after the attempt.
                    batches.push(RequestBatch {
                        ids: vec![record.id],
                        payloads: vec![record.payload.clone()],
                        oversize: true,
                    });
                    continue;
                }
                if !current.ids.is_empty() && current_bytes + size > byte_limit {
                    batches.push(std::mem::replace(
                        &mut current,
                        RequestBatch {
                            ids: Vec::new(),
                            payloads: Vec::new(),
                            oversize: false,
                        },
                    ));
                    current_bytes = POST_WRAPPER_BYTES;
                }
                current.ids.push(record.id);
                current.payloads.push(record.payload.clone());
                current_bytes += size;
            }
            if !current.ids.is_empty() {
                batches.push(current);
            }
            batches
        }
    }
}
