//! Output formatting for the CLI.
//!
//! Human mode prints trace lines and attributes as `name | value`; JSON mode
//! prints one object per invocation. Errors in JSON mode use the
//! `{code, message}` wire shape.

use recordgate::{Error, Outcome, Registration};
use serde_json::{json, Value as JsonValue};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

pub fn format_outcome(outcome: &Outcome, trace: &[String], mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => {
            let mut out = Vec::new();
            out.extend(trace.iter().cloned());
            out.push(format!(
                "committed {} after {} stage(s)",
                outcome.operation_id,
                outcome.stages_run.len()
            ));
            for (name, value) in outcome.target.attributes() {
                out.push(recordgate::pair_line(name, value));
            }
            out.join("\n")
        }
        OutputMode::Json => json!({
            "operation_id": outcome.operation_id.to_string(),
            "stages": outcome.stages_run,
            "target": outcome.target,
            "trace": trace,
        })
        .to_string(),
    }
}

pub fn format_registration(registration: &Registration, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => {
            let messages: Vec<&str> = registration.messages.iter().map(|m| m.as_str()).collect();
            [
                format!("name: {}", registration.name),
                format!(
                    "entity: {}",
                    registration.entity.as_deref().unwrap_or("(any)")
                ),
                format!("messages: {}", messages.join(", ")),
                format!("stage: {}", registration.stage),
                format!("snapshot: {}", registration.snapshot_name),
                format!(
                    "shared variable: {} = {}",
                    registration.shared_variable_key, registration.shared_variable_default
                ),
                format!("trigger: {}", registration.trigger_attribute),
                format!(
                    "transform: {}{}",
                    registration.transform_attribute,
                    if registration.require_transform_attribute {
                        " (required)"
                    } else {
                        ""
                    }
                ),
            ]
            .join("\n")
        }
        OutputMode::Json => serde_json::to_value(registration)
            .unwrap_or(JsonValue::Null)
            .to_string(),
    }
}

pub fn format_error(error: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("(error) {}", error),
        OutputMode::Json => {
            let (code, message) = match error {
                Error::Rejected { source, .. } => {
                    let wire = source.to_wire_error();
                    (wire.code, wire.message)
                }
                Error::Timeout { .. } => ("Timeout".to_string(), error.to_string()),
                Error::InvalidOperation(_) => ("InvalidOperation".to_string(), error.to_string()),
                Error::Config(_) => ("Config".to_string(), error.to_string()),
                Error::Io(_) => ("Io".to_string(), error.to_string()),
                Error::Serialization(_) => ("Serialization".to_string(), error.to_string()),
            };
            json!({ "code": code, "message": message }).to_string()
        }
    }
}
