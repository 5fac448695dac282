//! Operation identity types
//!
//! - [`OperationId`]: correlates every stage invoked for one logical operation
//! - [`MessageName`]: the mutation being performed
//! - [`Stage`]: where in the host pipeline a stage is registered

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Correlation id of one logical multi-stage operation
///
/// Every stage invoked for the same operation sees the same id; it is what
/// ties trace output from different stages together.
///
/// # Examples
///
/// ```
/// use recordgate_core::OperationId;
///
/// let a = OperationId::new();
/// let b = OperationId::new();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationId(Uuid);

impl OperationId {
    /// Create a new random OperationId using UUID v4
    pub fn new() -> Self {
        OperationId(Uuid::new_v4())
    }

    /// Wrap an id assigned by the host
    pub fn from_uuid(id: Uuid) -> Self {
        OperationId(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OperationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record mutation performed by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageName {
    Create,
    Update,
    Delete,
}

impl MessageName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageName::Create => "Create",
            MessageName::Update => "Update",
            MessageName::Delete => "Delete",
        }
    }

    /// Creates have no prior state, so never carry pre-images.
    pub fn has_prior_state(&self) -> bool {
        !matches!(self, MessageName::Create)
    }
}

impl fmt::Display for MessageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline stage a registration runs in.
///
/// Ordered by execution: validation, then the pre-operation stage, then the
/// core operation, then post-operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    PreValidation,
    PreOperation,
    MainOperation,
    PostOperation,
}

impl Stage {
    /// Numeric stage code used by hosts
    pub fn code(&self) -> u32 {
        match self {
            Stage::PreValidation => 10,
            Stage::PreOperation => 20,
            Stage::MainOperation => 30,
            Stage::PostOperation => 40,
        }
    }

    /// Stages that run before the record is written
    pub fn is_pre_commit(&self) -> bool {
        matches!(self, Stage::PreValidation | Stage::PreOperation)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::PreValidation => "PreValidation",
            Stage::PreOperation => "PreOperation",
            Stage::MainOperation => "MainOperation",
            Stage::PostOperation => "PostOperation",
        };
        f.write_str(name)
    }
}
