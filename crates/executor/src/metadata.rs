//! Invocation metadata
//!
//! Environment facts the host records about one invocation. Every field is
//! optional: hosts that cannot supply a value leave it unset and the trace
//! shows `unavailable`.

use chrono::{DateTime, Local, Utc};
use recordgate_core::{MessageName, OperationId, Stage};
use serde::{Deserialize, Serialize};
use sysinfo::System;

const UNAVAILABLE: &str = "unavailable";

/// Where and when an invocation ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationMetadata {
    pub thread_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    /// Local offset from UTC, e.g. `+02:00`
    pub utc_offset: Option<String>,
    pub machine_name: Option<String>,
    pub processor_count: Option<usize>,
}

impl InvocationMetadata {
    /// Capture the current thread, clock and machine.
    pub fn capture() -> Self {
        let machine_name = System::host_name().filter(|name| !name.is_empty());
        Self {
            thread_id: Some(format!("{:?}", std::thread::current().id())),
            timestamp: Some(Utc::now()),
            utc_offset: Some(Local::now().offset().to_string()),
            machine_name,
            processor_count: std::thread::available_parallelism()
                .ok()
                .map(|n| n.get()),
        }
    }

    /// One trace line per field, in a fixed order
    pub fn trace_lines(&self) -> Vec<String> {
        fn or_unavailable(v: Option<String>) -> String {
            v.unwrap_or_else(|| UNAVAILABLE.to_string())
        }
        vec![
            format!("thread: {}", or_unavailable(self.thread_id.clone())),
            format!(
                "timestamp: {}",
                or_unavailable(self.timestamp.map(|t| t.to_rfc3339()))
            ),
            format!("utc offset: {}", or_unavailable(self.utc_offset.clone())),
            format!("machine: {}", or_unavailable(self.machine_name.clone())),
            format!(
                "processors: {}",
                or_unavailable(self.processor_count.map(|n| n.to_string()))
            ),
        ]
    }
}

/// What the host is doing when it invokes a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationInfo {
    /// Correlation id, shared by every stage of the operation
    pub id: OperationId,
    pub message: MessageName,
    pub stage: Stage,
    /// Nesting depth; 1 for operations not triggered by another step
    pub depth: u32,
    /// Logical name of the record the operation targets
    pub primary_entity: String,
}

impl OperationInfo {
    pub fn trace_line(&self) -> String {
        format!(
            "operation: {} {} at {} (depth {}, correlation {})",
            self.message, self.primary_entity, self.stage, self.depth, self.id
        )
    }
}
