//! Shopsync Ingest - Shopify to ingest-sink sync tool

use anyhow::Result;
use clap::Parser;
use shopsync_common::logging::{init_logging, LogConfig, LogLevel};
use shopsync_ingest::config::Config;
use shopsync_ingest::dispatch::HttpSink;
use shopsync_ingest::pipeline::{self, RunOptions, RunSummary};
use shopsync_ingest::resource::Resource;
use shopsync_ingest::source::ShopifyClient;
use std::process;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(name = "shopsync-ingest")]
#[command(author, version, about = "Sync Shopify records into an ingest endpoint")]
struct Cli {
    /// Resource to sync
    #[arg(long, value_enum, default_value_t = Resource::Inventory)]
    resource: Resource,

    /// Maximum number of records to fetch
    #[arg(long, default_value_t = 25)]
    limit: u32,

    /// Override the default model for the resource
    #[arg(long)]
    model: Option<String>,

    /// Override the resource's search filter
    #[arg(long)]
    query: Option<String>,

    /// Number of concurrent HTTP posts to the ingest endpoint
    /// [default: MOOSE_INGEST_CONCURRENCY or 4]
    #[arg(long)]
    concurrency: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    // Environment variables take precedence
    let logging = LogConfig::builder()
        .level(log_level)
        .build()
        .merge_env()
        .and_then(|config| init_logging(&config));

    if let Err(e) = logging {
        eprintln!("Error: invalid logging configuration: {:#}", e);
        process::exit(1);
    }

    match execute(cli).await {
        Ok(summary) => {
            for failure in &summary.failed {
                debug!(record = %failure.record, cause = %failure.cause, "failed_row");
            }
            info!(
                resource = %summary.resource,
                model = %summary.model,
                fetched = summary.fetched,
                ingested = summary.ingested,
                failed = summary.failed.len(),
                "run_complete"
            );
        },
        Err(e) => {
            error!(error = %e, "run_failed");
            process::exit(1);
        },
    }
}

async fn execute(cli: Cli) -> Result<RunSummary> {
    let config = Config::from_env()?;

    let source = ShopifyClient::new(&config.source)?;
    let sink = HttpSink::from_config(&config.sink)?;
    info!(
        api_version = %config.source.api_version,
        sink = %config.sink.base_url,
        "configured"
    );

    let options = RunOptions {
        resource: cli.resource,
        limit: cli.limit,
        model: cli.model,
        query: cli.query,
        concurrency: cli.concurrency.unwrap_or(config.sink.concurrency),
    };

    Ok(pipeline::run(&source, &sink, &options).await?)
}
