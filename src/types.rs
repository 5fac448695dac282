//! Public types for the recordgate API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Record model
pub use recordgate_core::{
    AccessMode, MessageName, OperationId, Parameters, Record, RecordError, RecordRef,
    RecordView, Stage, Value, TARGET,
};

// Stores and tracing
pub use recordgate_primitives::{
    LogTraceSink, MemoryTraceSink, SharedVariableStore, SnapshotStore, TraceError, TraceSink,
    Tracer,
};

// Registration
pub use recordgate_config::{ConfigError, Registration};

// Interceptor contract
pub use recordgate_executor::{
    AttributeTransform, ErrorKind, Interceptor, InterceptorContext, InterceptorError,
    InvocationMetadata, OperationInfo, PhoneFormatInterceptor, TransformFailure, UppercaseText,
    WireError,
};

// Trace rendering
pub use recordgate_executor::{describe, pair_line};
