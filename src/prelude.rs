//! Convenient imports for recordgate.
//!
//! ```ignore
//! use recordgate::prelude::*;
//!
//! let pipeline = Pipeline::from_registration(Registration::default())?;
//! ```

// Main entry point
pub use crate::pipeline::{Operation, Outcome, Pipeline, PipelineBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Record model
pub use crate::types::{MessageName, Parameters, Record, Stage, Value};

// Interceptors
pub use crate::types::{
    Interceptor, InterceptorContext, InterceptorError, PhoneFormatInterceptor, Registration,
};

// Stores and sinks
pub use crate::types::{MemoryTraceSink, SharedVariableStore, SnapshotStore};
