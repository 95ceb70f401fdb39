//! Shopsync Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared record types, error handling and logging for the shopsync workspace.
//!
//! # Overview
//!
//! - **Records**: the flat, schema-stable rows delivered to the ingest sink
//! - **Error Handling**: run-level and per-record error types
//! - **Logging**: `tracing` subscriber setup driven by an explicit config
//!
//! # Example
//!
//! ```no_run
//! use shopsync_common::logging::{init_logging, LogConfig};
//! use tracing::info;
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&LogConfig::from_env()?)?;
//!     info!("ready");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{DeliveryError, Result, SyncError};
pub use types::{CustomerRecord, FlatRecord, InventoryRecord, OrderRecord, PostalAddress};
