//! Collector HTTP Client
//!
//! Sends wire-ready payloads to the collector endpoint: single events
//! as GET query parameters, batches as a schema'd POST envelope.

use std::time::Duration;

use serde_json::Value;

use crate::constants::{endpoints, schemas};
use crate::error::{Result, TrackerError};
use crate::payload::{Payload, SelfDescribingJson};

/// HTTP method the emitter uses for delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Reqwest-backed collector client. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Clone)]
pub struct CollectorClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl CollectorClient {
    /// `endpoint` is the collector base URL, e.g. `https://collector.example.com`.
    pub fn new(endpoint: &str) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http_client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one event as GET query parameters. Returns the status code
    /// on 2xx.
    pub async fn send_get(&self, payload: &Payload) -> Result<u16> {
        let url = format!("{}{}", self.endpoint, endpoints::GET_PATH);
        let query: Vec<(String, String)> = payload
            .as_map()
            .iter()
            .map(|(key, value)| (key.clone(), query_value(value)))
            .collect();

        let response = self
            .http_client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| TrackerError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if response.status().is_success() {
            Ok(status)
        } else {
            Err(TrackerError::Collector(status))
        }
    }

    /// Send a batch wrapped in the payload_data envelope. Returns the
    /// status code on 2xx.
    pub async fn send_post(&self, batch: &[Payload]) -> Result<u16> {
        let url = format!("{}{}", self.endpoint, endpoints::POST_PATH);
        let data: Vec<Value> = batch.iter().map(|payload| payload.to_json()).collect();
        let envelope = SelfDescribingJson::new(schemas::PAYLOAD_DATA, Value::Array(data));

        let response = self
            .http_client
            .post(&url)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| TrackerError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if response.status().is_success() {
            Ok(status)
        } else {
            Err(TrackerError::Collector(status))
        }
    }
}

/// Query-string rendering for a payload value. Strings go verbatim;
/// numbers and booleans use their JSON form.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
