//! Unified error types for recordgate.
//!
//! This module provides the host-facing error type. It wraps the normalized
//! interceptor error and the configuration and I/O errors a host meets while
//! assembling and running a pipeline.

use std::time::Duration;

use recordgate_config::ConfigError;
use recordgate_core::{RecordError, Stage};
use recordgate_executor::{ErrorKind, InterceptorError};
use thiserror::Error;

/// All recordgate errors.
#[derive(Debug, Error)]
pub enum Error {
    /// An interceptor failed; the operation is rejected and its changes
    /// discarded
    #[error("rejected by {interceptor} at {stage}: {source}")]
    Rejected {
        /// Name of the failing interceptor
        interceptor: String,
        /// Stage it ran in
        stage: Stage,
        /// The normalized failure
        #[source]
        source: InterceptorError,
    },

    /// One invocation ran past the wall-clock limit; the whole operation aborts
    #[error("interceptor {interceptor} exceeded the {limit:?} limit ({elapsed:?} elapsed)")]
    Timeout {
        /// Interceptor whose invocation ran too long
        interceptor: String,
        /// Duration of that invocation
        elapsed: Duration,
        /// Configured per-invocation limit
        limit: Duration,
    },

    /// The operation cannot be processed at all
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Registration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for recordgate operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is retryable.
    ///
    /// Only timeouts may succeed on a later attempt; rejections are
    /// deterministic for the same input.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Check if an interceptor rejected the operation.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Error::Rejected { .. })
    }

    /// Check if this is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Kind of the interceptor failure, for rejections.
    pub fn interceptor_kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Rejected { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

// Record errors outside any interceptor mean the operation itself is malformed
impl From<RecordError> for Error {
    fn from(e: RecordError) -> Self {
        Error::InvalidOperation(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
