//! Shopsync Ingest Library
//!
//! Pulls commerce records from the Shopify Admin API, flattens them into
//! schema-stable rows and posts them to an HTTP ingest sink.
//!
//! # Stages
//!
//! - **Source**: [`source::SourceClient`] returns the raw GraphQL payload
//! - **Normalize**: [`normalize`] turns one payload into flat records
//! - **Dispatch**: [`dispatch::dispatch`] delivers records with bounded concurrency
//!
//! # Example
//!
//! ```no_run
//! use shopsync_ingest::config::Config;
//! use shopsync_ingest::dispatch::HttpSink;
//! use shopsync_ingest::pipeline::{run, RunOptions};
//! use shopsync_ingest::resource::Resource;
//! use shopsync_ingest::source::ShopifyClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let source = ShopifyClient::new(&config.source)?;
//!     let sink = HttpSink::from_config(&config.sink)?;
//!
//!     let summary = run(&source, &sink, &RunOptions::new(Resource::Orders)).await?;
//!     println!("{} of {} ingested", summary.ingested, summary.fetched);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod normalize;
pub mod pipeline;
pub mod resource;
pub mod source;
