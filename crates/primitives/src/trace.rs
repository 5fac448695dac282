//! Diagnostic trace sinks
//!
//! Interceptors write human-readable trace lines for operators. Tracing is
//! best effort: a failing sink must never change the outcome of an
//! operation, so writes go through a [`Tracer`] that swallows sink failures
//! (including panics) and reports them to the process log instead.
//!
//! ## Sinks
//!
//! - [`MemoryTraceSink`]: collects lines, optionally bounded in bytes
//! - [`LogTraceSink`]: forwards lines to `tracing` under `recordgate::trace`

use std::panic::{self, AssertUnwindSafe};

use parking_lot::Mutex;
use thiserror::Error;
use tracing::warn;

/// Failure writing to a sink. Never escapes a [`Tracer`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// Sink is bounded and the line does not fit
    #[error("trace log full: {used} of {limit} bytes used, line needs {needed}")]
    CapacityExceeded {
        /// Configured limit in bytes
        limit: usize,
        /// Bytes already written
        used: usize,
        /// Bytes the rejected line needs
        needed: usize,
    },

    /// Sink cannot accept writes
    #[error("trace sink unavailable: {0}")]
    Unavailable(String),
}

/// Append-only destination for trace lines.
pub trait TraceSink: Send + Sync {
    /// Append one line (without its terminating newline)
    fn write_line(&self, line: &str) -> Result<(), TraceError>;
}

/// In-memory sink, as kept by a host for one operation.
#[derive(Debug, Default)]
pub struct MemoryTraceSink {
    inner: Mutex<MemoryLog>,
    limit: Option<usize>,
}

#[derive(Debug, Default)]
struct MemoryLog {
    lines: Vec<String>,
    bytes: usize,
}

impl MemoryTraceSink {
    /// Unbounded sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that rejects lines once `limit` bytes (newlines included) are used
    pub fn with_capacity_bytes(limit: usize) -> Self {
        Self {
            inner: Mutex::new(MemoryLog::default()),
            limit: Some(limit),
        }
    }

    /// Lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().lines.clone()
    }

    /// Whole log, each line newline-terminated
    pub fn contents(&self) -> String {
        let log = self.inner.lock();
        let mut out = String::with_capacity(log.bytes);
        for line in &log.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Number of lines written
    pub fn len(&self) -> usize {
        self.inner.lock().lines.len()
    }

    /// True when nothing has been written
    pub fn is_empty(&self) -> bool {
        self.inner.lock().lines.is_empty()
    }

    /// Lines containing `needle`
    pub fn matching(&self, needle: &str) -> Vec<String> {
        self.inner
            .lock()
            .lines
            .iter()
            .filter(|line| line.contains(needle))
            .cloned()
            .collect()
    }

    /// Drop everything written so far
    pub fn clear(&self) {
        let mut log = self.inner.lock();
        log.lines.clear();
        log.bytes = 0;
    }
}

impl TraceSink for MemoryTraceSink {
    fn write_line(&self, line: &str) -> Result<(), TraceError> {
        let mut log = self.inner.lock();
        let needed = line.len() + 1;
        if let Some(limit) = self.limit {
            if log.bytes + needed > limit {
                return Err(TraceError::CapacityExceeded {
                    limit,
                    used: log.bytes,
                    needed,
                });
            }
        }
        log.bytes += needed;
        log.lines.push(line.to_string());
        Ok(())
    }
}

/// Sink that forwards every line to the process log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTraceSink;

impl TraceSink for LogTraceSink {
    fn write_line(&self, line: &str) -> Result<(), TraceError> {
        tracing::info!(target: "recordgate::trace", "{}", line);
        Ok(())
    }
}

/// Best-effort handle over an optional sink.
///
/// An absent sink makes every call a no-op.
#[derive(Clone, Copy, Default)]
pub struct Tracer<'a> {
    sink: Option<&'a dyn TraceSink>,
}

impl<'a> Tracer<'a> {
    pub fn new(sink: Option<&'a dyn TraceSink>) -> Self {
        Self { sink }
    }

    /// Tracer with no sink
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Append `line`. Never fails and never panics.
    pub fn trace(&self, line: impl AsRef<str>) {
        let Some(sink) = self.sink else {
            return;
        };
        let line = line.as_ref();
        let line = line.strip_suffix('\n').unwrap_or(line);
        match panic::catch_unwind(AssertUnwindSafe(|| sink.write_line(line))) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(error = %e, "dropping trace line"),
            Err(_) => warn!("trace sink panicked, dropping trace line"),
        }
    }
}

impl std::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracer")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
