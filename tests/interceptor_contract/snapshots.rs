//! Snapshot Tests
//!
//! The designated pre-image is optional: present, its prior phone value is
//! traced; absent, exactly one "missing snapshot" line is traced.

use crate::*;

#[test]
fn test_missing_snapshot_traced_exactly_once() {
    let mut h = Harness::for_target(contact("555-abc"));

    h.execute(&default_interceptor()).unwrap();
    assert_eq!(
        h.sink.matching("missing snapshot"),
        vec!["missing snapshot: PreImageDemo".to_string()]
    );
}

#[test]
fn test_differently_named_snapshot_counts_as_missing() {
    let mut h = Harness::for_target(contact("555-abc"))
        .with_pre_image("SomeOtherImage", contact("555-old"));

    h.execute(&default_interceptor()).unwrap();
    assert_eq!(h.sink.matching("missing snapshot").len(), 1);
    assert!(h.sink.matching("prior value").is_empty());
}

#[test]
fn test_prior_value_traced_from_snapshot() {
    let mut h = Harness::for_target(contact("555-new"))
        .with_pre_image("PreImageDemo", contact("555-old"));

    h.execute(&default_interceptor()).unwrap();
    assert!(h.sink.matching("missing snapshot").is_empty());
    assert_eq!(
        h.sink.matching("prior value"),
        vec!["PreImageDemo prior value of telephone1: 555-old".to_string()]
    );
}

#[test]
fn test_snapshot_without_phone_traces_nothing() {
    let image = Record::new("contact").with_attribute("firstname", "Ada");
    let mut h = Harness::for_target(contact("555-new")).with_pre_image("PreImageDemo", image);

    h.execute(&default_interceptor()).unwrap();
    assert!(h.sink.matching("missing snapshot").is_empty());
    assert!(h.sink.matching("prior value").is_empty());
}

#[test]
fn test_null_prior_value_renders_marker() {
    let image = Record::new("contact").with_attribute("telephone1", Value::Null);
    let mut h = Harness::for_target(contact("555-new")).with_pre_image("PreImageDemo", image);

    h.execute(&default_interceptor()).unwrap();
    assert_eq!(
        h.sink.matching("prior value"),
        vec!["PreImageDemo prior value of telephone1: NULL".to_string()]
    );
}

#[test]
fn test_snapshot_is_not_modified() {
    let image = contact("555-old");
    let mut h = Harness::for_target(contact("555-new")).with_pre_image("PreImageDemo", image.clone());

    h.execute(&default_interceptor()).unwrap();
    let view = h.images.snapshot("PreImageDemo").unwrap();
    assert_eq!(view.get("telephone1").unwrap(), image.attribute("telephone1").unwrap());
}
