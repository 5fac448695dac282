//! Trace Output Tests
//!
//! Trace content and ordering, value rendering, and best-effort delivery.

use crate::*;
use recordgate::{RecordRef, TraceError, TraceSink};

#[test]
fn test_parameters_rendered_one_per_line() {
    let params = Parameters::for_target(contact("555-abc"))
        .with("AnswerCount", 3i64)
        .with("Caller", RecordRef::new("systemuser", Default::default()))
        .with("Note", Value::Null);
    let mut h = Harness::new(params);

    h.execute(&default_interceptor()).unwrap();
    let lines = h.sink.lines();
    assert_eq!(
        &lines[..4],
        &[
            "AnswerCount | 3".to_string(),
            "Caller | systemuser".to_string(),
            "Note | NULL".to_string(),
            "Target | contact".to_string(),
        ]
    );
}

#[test]
fn test_attributes_traced_after_transformation() {
    let mut h = Harness::for_target(contact("555-abc"));

    h.execute(&default_interceptor()).unwrap();
    let lines = h.sink.lines();
    assert_eq!(
        &lines[1..4],
        &[
            "firstname | Ada".to_string(),
            "lastname | Lovelace".to_string(),
            "telephone1 | 555-ABC".to_string(),
        ]
    );
}

#[test]
fn test_skipped_invocation_only_dumps_parameters() {
    let mut h = Harness::for_target(contact_without_trigger("555-abc"));

    h.execute(&default_interceptor()).unwrap();
    assert_eq!(h.sink.lines(), vec!["Target | contact".to_string()]);
}

#[test]
fn test_metadata_lines_with_captured_metadata() {
    let mut h = Harness::for_target(contact("555-abc"));
    h.metadata = InvocationMetadata::capture();

    h.execute(&default_interceptor()).unwrap();
    assert_eq!(h.sink.matching("thread: ThreadId(").len(), 1);
    assert_eq!(h.sink.matching("timestamp: ").len(), 1);
    assert_eq!(h.sink.matching("processors: ").len(), 1);
    assert!(h.sink.matching("timestamp: unavailable").is_empty());
}

#[test]
fn test_partial_metadata_never_fails() {
    let mut h = Harness::for_target(contact("555-abc"));
    h.metadata = InvocationMetadata {
        machine_name: Some("crm-host-01".into()),
        ..Default::default()
    };

    h.execute(&default_interceptor()).unwrap();
    assert_eq!(h.sink.matching("machine: crm-host-01").len(), 1);
    assert_eq!(h.sink.matching(": unavailable").len(), 4);
}

#[test]
fn test_trace_is_newline_terminated() {
    let mut h = Harness::for_target(contact("555-abc"));

    h.execute(&default_interceptor()).unwrap();
    let contents = h.sink.contents();
    assert!(contents.ends_with('\n'));
    assert_eq!(contents.lines().count(), h.sink.len());
}

// =============================================================================
// BEST EFFORT
// =============================================================================

struct FailingSink;

impl TraceSink for FailingSink {
    fn write_line(&self, _line: &str) -> Result<(), TraceError> {
        Err(TraceError::Unavailable("log service down".into()))
    }
}

#[test]
fn test_failing_sink_does_not_fail_execute() {
    let mut params = Parameters::for_target(contact("555-abc"));
    let images = SnapshotStore::new();
    let mut shared = SharedVariableStore::default();

    let mut ctx = InterceptorContext::builder(&mut params, &images, &mut shared)
        .trace_sink(&FailingSink)
        .build();
    default_interceptor().execute(&mut ctx).unwrap();

    assert_eq!(
        params.target().unwrap().attribute("telephone1"),
        Some(&Value::from("555-ABC"))
    );
    assert!(shared.has("SharedVariableKey"));
}

#[test]
fn test_full_sink_does_not_fail_execute() {
    let mut h = Harness::for_target(contact("555-abc"));
    h.sink = MemoryTraceSink::with_capacity_bytes(24);

    h.execute(&default_interceptor()).unwrap();
    assert_eq!(h.sink.lines(), vec!["Target | contact".to_string()]);
    assert_eq!(h.attribute("telephone1"), Some(&Value::from("555-ABC")));
}

#[test]
fn test_no_sink_still_executes() {
    let mut params = Parameters::for_target(contact("555-abc"));
    let images = SnapshotStore::new();
    let mut shared = SharedVariableStore::default();

    let mut ctx = InterceptorContext::builder(&mut params, &images, &mut shared).build();
    default_interceptor().execute(&mut ctx).unwrap();
    assert!(shared.has("SharedVariableKey"));
}
