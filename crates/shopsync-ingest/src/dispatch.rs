//! Ingestion dispatcher
//!
//! Delivers already-normalized records to the sink, one request per record,
//! with at most `concurrency` requests in flight. A failed record is
//! recorded and skipped; it never aborts its siblings or the run.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shopsync_common::{DeliveryError, FlatRecord, Result, SyncError};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::SinkConfig;

/// Destination that accepts one JSON record per call
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn deliver(&self, model: &str, record: &Value) -> std::result::Result<(), DeliveryError>;
}

/// HTTP ingest endpoint: `POST {base_url}/ingest/{model}`
pub struct HttpSink {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpSink {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| SyncError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    pub fn from_config(config: &SinkConfig) -> Result<Self> {
        Self::new(config.base_url.clone(), Duration::from_secs(config.timeout_secs))
    }

    pub fn ingest_url(&self, model: &str) -> String {
        format!("{}/ingest/{}", self.base_url.trim_end_matches('/'), model)
    }
}

#[async_trait]
impl RecordSink for HttpSink {
    async fn deliver(&self, model: &str, record: &Value) -> std::result::Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.ingest_url(model))
            .timeout(self.timeout)
            .json(record)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(DeliveryError::Status(status.as_u16()));
        }

        Ok(())
    }
}

fn classify(err: reqwest::Error) -> DeliveryError {
    if err.is_timeout() {
        DeliveryError::Timeout
    } else {
        DeliveryError::Transport(err.to_string())
    }
}

/// One record that could not be delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFailure {
    /// Identity of the record, see [`FlatRecord::identity`]
    pub record: String,
    pub cause: String,
}

/// Outcome of a dispatch call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReport {
    pub succeeded: usize,
    pub failures: Vec<DeliveryFailure>,
}

impl DispatchReport {
    /// Records attempted; always `succeeded + failures.len()`
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failures.len()
    }
}

/// Deliver every record once, with bounded parallelism.
///
/// `concurrency` is clamped to at least 1. An empty slice returns an empty
/// report without touching the sink. Completion order is unspecified; the
/// report content is not.
pub async fn dispatch<S, R>(sink: &S, model: &str, records: &[R], concurrency: usize) -> DispatchReport
where
    S: RecordSink + ?Sized,
    R: FlatRecord,
{
    if records.is_empty() {
        return DispatchReport::default();
    }

    let concurrency = concurrency.max(1);
    debug!(model, records = records.len(), concurrency, "Dispatching records");

    stream::iter(records)
        .map(|record| async move {
            let outcome = match serde_json::to_value(record) {
                Ok(body) => sink.deliver(model, &body).await,
                Err(e) => Err(DeliveryError::Encode(e.to_string())),
            };
            (record, outcome)
        })
        .buffer_unordered(concurrency)
        .fold(DispatchReport::default(), |mut report, (record, outcome)| async move {
            match outcome {
                Ok(()) => report.succeeded += 1,
                Err(err) => {
                    let identity = record.identity();
                    warn!(model, record = %identity, error = %err, "ingest_failed_row");
                    report.failures.push(DeliveryFailure {
                        record: identity,
                        cause: err.to_string(),
                    });
                },
            }
            report
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_url() {
        let sink = HttpSink::new("http://localhost:4000/", Duration::from_secs(1)).unwrap();
        assert_eq!(sink.ingest_url("shopify_orders"), "http://localhost:4000/ingest/shopify_orders");
    }

    #[test]
    fn test_attempted_counts_both_outcomes() {
        let report = DispatchReport {
            succeeded: 3,
            failures: vec![DeliveryFailure {
                record: "o1".to_string(),
                cause: "request timed out".to_string(),
            }],
        };
        assert_eq!(report.attempted(), 4);
    }
}
