//! Internal error taxonomy
//!
//! Every record-level operation reports one of these. They never cross the
//! interceptor boundary as-is: the executor normalizes them into its single
//! `InterceptorError`.

use thiserror::Error;

/// Record-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Primary input absent or not a record
    #[error("invalid target: {reason}")]
    InvalidTarget {
        /// What was wrong with the target
        reason: String,
    },

    /// Attribute not present on the view
    #[error("attribute '{attribute}' is not present on {record}")]
    MissingAttribute {
        /// Logical name of the record
        record: String,
        /// Requested attribute
        attribute: String,
    },

    /// Named snapshot not supplied by the host
    #[error("snapshot '{name}' was not supplied for this operation")]
    MissingSnapshot {
        /// Requested snapshot name
        name: String,
    },

    /// Shared variable not set by any earlier stage
    #[error("shared variable '{key}' is not set")]
    MissingVariable {
        /// Requested key
        key: String,
    },

    /// Attribute present but not convertible to the required shape
    #[error("cannot transform attribute '{attribute}': {reason}")]
    Transformation {
        /// Attribute being transformed
        attribute: String,
        /// Why conversion failed
        reason: String,
    },

    /// Write attempted through an immutable view
    #[error("view of {record} is read-only, cannot set '{attribute}'")]
    ReadOnlyView {
        /// Logical name of the record
        record: String,
        /// Attribute the caller tried to set
        attribute: String,
    },
}

/// Result type for record-level operations.
pub type Result<T> = std::result::Result<T, RecordError>;

impl RecordError {
    /// Absence of optional data.
    ///
    /// Callers are expected to branch on `has` checks; seeing one of these
    /// escape means a check was skipped.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            RecordError::MissingAttribute { .. }
                | RecordError::MissingSnapshot { .. }
                | RecordError::MissingVariable { .. }
        )
    }

    /// Failures that must reject the operation.
    pub fn is_fatal(&self) -> bool {
        !self.is_missing()
    }
}
