//! Core types for recordgate
//!
//! This crate defines the data exchanged between a host and an interceptor:
//! - [`Value`]: tagged attribute value
//! - [`Record`]: owned record payload
//! - [`RecordView`]: read/write or read-only view over a record
//! - [`Parameters`]: host input parameters, including the `Target`
//! - [`RecordError`]: record-level error taxonomy

pub mod error;
pub mod parameters;
pub mod record;
pub mod types;
pub mod value;
pub mod view;

pub use error::{RecordError, Result};
pub use parameters::{Parameters, TARGET};
pub use record::Record;
pub use types::{MessageName, OperationId, Stage};
pub use value::{RecordRef, Value};
pub use view::{AccessMode, Attributes, RecordView};
