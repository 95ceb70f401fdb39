//! Fetch, normalize, dispatch
//!
//! Normalization of the whole payload completes before the first record is
//! sent.

use serde::{Deserialize, Serialize};
use shopsync_common::{FlatRecord, Result};
use std::time::Instant;
use tracing::{info, instrument};

use crate::dispatch::{dispatch, DeliveryFailure, DispatchReport, RecordSink};
use crate::normalize;
use crate::resource::Resource;
use crate::source::{FetchParams, SourceClient};

/// What to sync and how hard to push the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub resource: Resource,
    pub limit: u32,
    /// Sink model override; defaults to [`Resource::default_model`]
    pub model: Option<String>,
    /// Search filter override; defaults to [`Resource::default_query`]
    pub query: Option<String>,
    pub concurrency: usize,
}

impl RunOptions {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            limit: 25,
            model: None,
            query: None,
            concurrency: crate::config::DEFAULT_CONCURRENCY,
        }
    }

    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.resource.default_model())
    }

    fn fetch_params(&self) -> FetchParams {
        let mut params = FetchParams::for_resource(self.resource, self.limit);
        if self.query.is_some() {
            params.query = self.query.clone();
        }
        params
    }
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub resource: Resource,
    pub model: String,
    /// Flat records produced by normalization
    pub fetched: usize,
    pub ingested: usize,
    pub failed: Vec<DeliveryFailure>,
}

/// Run one sync. Only configuration and fetch errors are returned as `Err`;
/// delivery failures end up in [`RunSummary::failed`].
#[instrument(skip(source, sink), fields(resource = %options.resource))]
pub async fn run<C, S>(source: &C, sink: &S, options: &RunOptions) -> Result<RunSummary>
where
    C: SourceClient + ?Sized,
    S: RecordSink + ?Sized,
{
    let model = options.model();
    info!(limit = options.limit, model, concurrency = options.concurrency, "starting");

    let raw = source.fetch(options.resource, &options.fetch_params()).await?;

    let (fetched, report) = match options.resource {
        Resource::Inventory => deliver(sink, model, normalize::inventory(&raw), options).await,
        Resource::Orders => deliver(sink, model, normalize::orders(&raw), options).await,
        Resource::Customers => deliver(sink, model, normalize::customers(&raw), options).await,
    };

    Ok(RunSummary {
        resource: options.resource,
        model: model.to_string(),
        fetched,
        ingested: report.succeeded,
        failed: report.failures,
    })
}

async fn deliver<S, R>(
    sink: &S,
    model: &str,
    records: Vec<R>,
    options: &RunOptions,
) -> (usize, DispatchReport)
where
    S: RecordSink + ?Sized,
    R: FlatRecord,
{
    info!(count = records.len(), "fetched_rows");

    let started = Instant::now();
    let report = dispatch(sink, model, &records, options.concurrency).await;

    info!(
        count = report.succeeded,
        failed = report.failures.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "ingested_rows"
    );

    (records.len(), report)
}
