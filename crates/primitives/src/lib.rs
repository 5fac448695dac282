//! Primitives an interceptor reads and writes during one invocation
//!
//! - [`SnapshotStore`]: named, immutable pre-images of the record
//! - [`SharedVariableStore`]: values passed between stages of one operation
//! - [`TraceSink`] / [`Tracer`]: best-effort diagnostic output
//!
//! All three are plain in-memory structures owned by the host. They hold no
//! global state and do not outlive the operation they were created for.

pub mod shared;
pub mod snapshot;
pub mod trace;

pub use shared::SharedVariableStore;
pub use snapshot::SnapshotStore;
pub use trace::{LogTraceSink, MemoryTraceSink, TraceError, TraceSink, Tracer};
