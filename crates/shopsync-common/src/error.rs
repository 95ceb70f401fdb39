//! Error types for shopsync

use thiserror::Error;

/// Result type alias for run-level operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Fatal, run-level errors.
///
/// Anything in here aborts the run. Per-record delivery problems are
/// reported through [`DeliveryError`] instead and never surface here.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source fetch failed: {0}")]
    Source(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SyncError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a source fetch error
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }
}

/// Why a single record could not be delivered to the sink
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("request timed out")]
    Timeout,

    #[error("sink responded with status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to encode record: {0}")]
    Encode(String),
}
