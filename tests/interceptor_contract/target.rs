//! Target Validation Tests
//!
//! The target must be present and a record before anything else happens.

use crate::*;
use recordgate::ErrorKind;

#[test]
fn test_missing_target_is_invalid() {
    let mut h = Harness::new(Parameters::new().with("Note", "no target here"));

    let err = h.execute(&default_interceptor()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTarget);
    assert_eq!(err.message(), "invalid target: no target found");
}

#[test]
fn test_non_record_target_is_invalid() {
    let mut h = Harness::new(Parameters::new().with("Target", 42i64));

    let err = h.execute(&default_interceptor()).unwrap_err();
    assert!(err.is_invalid_target());
    assert!(err.message().contains("Int"));
}

#[test]
fn test_unnamed_target_is_invalid() {
    let mut h = Harness::for_target(Record::new(""));

    let err = h.execute(&default_interceptor()).unwrap_err();
    assert!(err.is_invalid_target());
}

#[test]
fn test_invalid_target_leaves_everything_untouched() {
    let params = Parameters::new().with("Target", "contact");
    let mut h = Harness::new(params.clone());

    h.execute(&default_interceptor()).unwrap_err();
    assert!(h.sink.is_empty());
    assert!(h.shared.is_empty());
    assert_eq!(h.params, params);
}
