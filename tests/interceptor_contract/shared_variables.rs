//! Shared Variable Tests
//!
//! The first invocation for an operation seeds the designated key; later
//! invocations on the same store see the existing value and leave it.

use crate::*;

#[test]
fn test_first_invocation_seeds_default() {
    let mut h = Harness::for_target(contact("555-abc"));

    h.execute(&default_interceptor()).unwrap();
    assert_eq!(h.shared.get("SharedVariableKey").unwrap(), &Value::from("Demo value"));
    assert_eq!(
        h.sink.matching("shared variable"),
        vec!["adding new shared variable. key: SharedVariableKey value: Demo value".to_string()]
    );
}

#[test]
fn test_second_invocation_keeps_first_value() {
    let interceptor = default_interceptor();
    let mut h = Harness::for_target(contact("555-abc"));

    h.execute(&interceptor).unwrap();
    h.sink.clear();
    h.execute(&interceptor).unwrap();

    assert_eq!(h.shared.len(), 1);
    assert_eq!(h.shared.get("SharedVariableKey").unwrap(), &Value::from("Demo value"));
    assert_eq!(
        h.sink.matching("shared variable"),
        vec![
            "retrieving existing shared variable. key: SharedVariableKey value: Demo value"
                .to_string()
        ]
    );
}

#[test]
fn test_value_from_earlier_stage_wins() {
    let mut h = Harness::for_target(contact("555-abc"));
    h.shared.put("SharedVariableKey", 7i64);

    h.execute(&default_interceptor()).unwrap();
    assert_eq!(h.shared.get("SharedVariableKey").unwrap(), &Value::Int(7));
    assert_eq!(h.sink.matching("value: 7").len(), 1);
}

#[test]
fn test_configured_key_and_default() {
    let interceptor = PhoneFormatInterceptor::new(
        Registration::new().shared_variable("FormattedBy", "phone-format"),
    );
    let mut h = Harness::for_target(contact("555-abc"));

    h.execute(&interceptor).unwrap();
    assert!(!h.shared.has("SharedVariableKey"));
    assert_eq!(h.shared.get("FormattedBy").unwrap(), &Value::from("phone-format"));
}

#[test]
fn test_skipped_invocation_does_not_seed() {
    let mut h = Harness::for_target(contact_without_trigger("555-abc"));

    h.execute(&default_interceptor()).unwrap();
    assert!(h.shared.is_empty());
}
