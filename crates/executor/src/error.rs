//! The single error an interceptor reports to its host.
//!
//! Internally, record operations fail with `RecordError`, transforms with
//! boxed errors, and bugs with panics. None of those cross the interceptor
//! boundary: everything is normalized into [`InterceptorError`], which
//! carries a stable [`ErrorKind`] and the root-cause message.
//!
//! ## Wire Format
//!
//! ```json
//! {"code": "Transformation", "message": "cannot transform attribute 'telephone1': expected String, got Int"}
//! ```

use std::any::Any;
use std::fmt;

use recordgate_core::RecordError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of an [`InterceptorError`].
///
/// Codes are stable; hosts may match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Target absent or not a record
    InvalidTarget,
    /// Attribute read without a presence check
    MissingAttribute,
    /// Snapshot read without a presence check
    MissingSnapshot,
    /// Shared variable read without a presence check
    MissingVariable,
    /// Attribute value could not be converted
    Transformation,
    /// Write through an immutable view
    ReadOnlyView,
    /// Anything else: foreign errors, panics
    Unexpected,
}

impl ErrorKind {
    /// Canonical code string
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidTarget => "InvalidTarget",
            ErrorKind::MissingAttribute => "MissingAttribute",
            ErrorKind::MissingSnapshot => "MissingSnapshot",
            ErrorKind::MissingVariable => "MissingVariable",
            ErrorKind::Transformation => "Transformation",
            ErrorKind::ReadOnlyView => "ReadOnlyView",
            ErrorKind::Unexpected => "Unexpected",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Normalized interceptor failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InterceptorError {
    kind: ErrorKind,
    message: String,
}

impl InterceptorError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Wrap a failure that has no dedicated kind
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Normalize a panic payload caught at the execute boundary
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "interceptor panicked".to_string()
        };
        Self::unexpected(message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Stable code of the kind
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Root-cause message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The host must reject the operation. Only a forgotten presence check
    /// produces a non-fatal kind, and even those abort the current stage.
    pub fn is_invalid_target(&self) -> bool {
        self.kind == ErrorKind::InvalidTarget
    }

    pub fn is_transformation(&self) -> bool {
        self.kind == ErrorKind::Transformation
    }

    /// Wire representation for hosts that report over JSON
    pub fn to_wire_error(&self) -> WireError {
        WireError {
            code: self.code().to_string(),
            message: self.message.clone(),
        }
    }
}

impl From<RecordError> for InterceptorError {
    fn from(e: RecordError) -> Self {
        let kind = match &e {
            RecordError::InvalidTarget { .. } => ErrorKind::InvalidTarget,
            RecordError::MissingAttribute { .. } => ErrorKind::MissingAttribute,
            RecordError::MissingSnapshot { .. } => ErrorKind::MissingSnapshot,
            RecordError::MissingVariable { .. } => ErrorKind::MissingVariable,
            RecordError::Transformation { .. } => ErrorKind::Transformation,
            RecordError::ReadOnlyView { .. } => ErrorKind::ReadOnlyView,
        };
        Self::new(kind, e.to_string())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for InterceptorError {
    fn from(e: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::unexpected(e.to_string())
    }
}

/// `{code, message}` shape of an [`InterceptorError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireError {
    pub code: String,
    pub message: String,
}

impl WireError {
    pub fn to_json(&self) -> String {
        // Two string fields always serialize.
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":"{}","message":""}}"#, self.code)
        })
    }
}
