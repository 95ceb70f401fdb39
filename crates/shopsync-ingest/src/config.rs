//! Run configuration
//!
//! Built once at startup from the environment (after `.env` is loaded) and
//! passed by value into the pipeline.

use serde::{Deserialize, Serialize};
use shopsync_common::{Result, SyncError};

// ============================================================================
// Configuration Constants
// ============================================================================

/// Default Admin API version.
pub const DEFAULT_API_VERSION: &str = "2025-07";

/// Default timeout for source API requests in seconds.
pub const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 30;

/// Default ingest sink base URL.
pub const DEFAULT_SINK_URL: &str = "http://localhost:4000";

/// Default per-record ingest timeout in seconds.
pub const DEFAULT_SINK_TIMEOUT_SECS: u64 = 10;

/// Default number of in-flight ingest requests.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Full run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    pub sink: SinkConfig,
}

/// Commerce platform connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Shop domain (`my-store.myshopify.com`) or a full base URL
    pub shop: String,
    #[serde(skip_serializing)]
    pub access_token: String,
    pub api_version: String,
    pub timeout_secs: u64,
}

/// Ingest sink settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub concurrency: usize,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SINK_URL.to_string(),
            timeout_secs: DEFAULT_SINK_TIMEOUT_SECS,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Config {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    ///
    /// - `SHOPIFY_SHOP`, `SHOPIFY_ACCESS_TOKEN`: required
    /// - `SHOPIFY_API_VERSION`, `SHOPIFY_TIMEOUT_SECS`
    /// - `MOOSE_BASE_URL`, `MOOSE_INGEST_TIMEOUT`, `MOOSE_INGEST_CONCURRENCY`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| SyncError::config(format!("{} is not set", key)))
        };

        let source = SourceConfig {
            shop: required("SHOPIFY_SHOP")?,
            access_token: required("SHOPIFY_ACCESS_TOKEN")?,
            api_version: lookup("SHOPIFY_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            timeout_secs: parsed(&lookup, "SHOPIFY_TIMEOUT_SECS", DEFAULT_SOURCE_TIMEOUT_SECS)?,
        };

        let sink = SinkConfig {
            base_url: lookup("MOOSE_BASE_URL").unwrap_or_else(|| DEFAULT_SINK_URL.to_string()),
            timeout_secs: parsed(&lookup, "MOOSE_INGEST_TIMEOUT", DEFAULT_SINK_TIMEOUT_SECS)?,
            concurrency: parsed(&lookup, "MOOSE_INGEST_CONCURRENCY", DEFAULT_CONCURRENCY)?,
        };

        Ok(Self { source, sink })
    }
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| SyncError::config(format!("{} must be a number, got '{}'", key, raw))),
        None => Ok(default),
    }
}
