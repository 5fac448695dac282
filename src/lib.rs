//! # recordgate
//!
//! Pre-commit interceptors for record mutations.
//!
//! A host submits a create or update of a record as an [`Operation`]. The
//! [`Pipeline`] runs each registered interceptor against it in stage order.
//! Each interceptor may change the target record in place, read pre-images
//! of the record, and pass values to later stages through shared variables.
//! Any interceptor failure rejects the operation.
//!
//! ## Quick Start
//!
//! ```ignore
//! use recordgate::prelude::*;
//!
//! let pipeline = Pipeline::from_registration(Registration::default())?;
//!
//! let contact = Record::new("contact")
//!     .with_attribute("firstname", "Ada")
//!     .with_attribute("telephone1", "555-abc");
//!
//! let outcome = pipeline.run(Operation::new(MessageName::Update, contact))?;
//! assert_eq!(outcome.target.attribute("telephone1"), Some(&Value::from("555-ABC")));
//! ```
//!
//! ## Crates
//!
//! - `recordgate-core`: values, records, views and parameters
//! - `recordgate-primitives`: snapshot and shared-variable stores, trace sinks
//! - `recordgate-config`: deployment registrations
//! - `recordgate-executor`: the interceptor contract and its normalized error

mod error;
mod pipeline;
mod types;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use pipeline::{Operation, Outcome, Pipeline, PipelineBuilder, DEFAULT_TIMEOUT};

// Re-export types
pub use types::*;
