//! Transformation Tests
//!
//! Trigger present: the phone attribute is normalized in place.
//! Trigger absent: nothing changes.

use crate::*;
use proptest::prelude::*;
use recordgate::{AttributeTransform, ErrorKind, TransformFailure};

// =============================================================================
// TRIGGER PRESENT
// =============================================================================

#[test]
fn test_mixed_case_phone_is_uppercased() {
    let mut h = Harness::for_target(contact("+1 (555) call-ADA ext"));

    h.execute(&default_interceptor()).unwrap();
    assert_eq!(h.attribute("telephone1"), Some(&Value::from("+1 (555) CALL-ADA EXT")));
}

#[test]
fn test_other_attributes_untouched() {
    let mut h = Harness::for_target(contact("555-abc"));

    h.execute(&default_interceptor()).unwrap();
    assert_eq!(h.attribute("firstname"), Some(&Value::from("Ada")));
    assert_eq!(h.attribute("lastname"), Some(&Value::from("Lovelace")));
    assert_eq!(h.target().len(), 3);
}

#[test]
fn test_second_run_is_idempotent() {
    let mut h = Harness::for_target(contact("555-abc"));
    let interceptor = default_interceptor();

    h.execute(&interceptor).unwrap();
    let once = h.target().clone();
    h.execute(&interceptor).unwrap();
    assert_eq!(h.target(), &once);
}

#[test]
fn test_configured_attributes() {
    let interceptor = PhoneFormatInterceptor::new(
        Registration::new()
            .trigger_attribute("lastname")
            .transform_attribute("mobilephone"),
    );
    let record = Record::new("contact")
        .with_attribute("lastname", "Lovelace")
        .with_attribute("mobilephone", "07 mob")
        .with_attribute("telephone1", "555-abc");
    let mut h = Harness::for_target(record);

    h.execute(&interceptor).unwrap();
    assert_eq!(h.attribute("mobilephone"), Some(&Value::from("07 MOB")));
    assert_eq!(h.attribute("telephone1"), Some(&Value::from("555-abc")));
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_non_string_phone_fails_unmodified() {
    for phone in [Value::Int(5550100), Value::Bool(false), Value::Decimal(5.5), Value::Null] {
        let mut h = Harness::for_target(contact(phone.clone()));

        let err = h.execute(&default_interceptor()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transformation, "phone {:?}", phone);
        assert_eq!(h.attribute("telephone1"), Some(&phone));
    }
}

#[test]
fn test_absent_phone_fails_when_required() {
    let record = Record::new("contact").with_attribute("firstname", "Ada");
    let mut h = Harness::for_target(record.clone());

    let err = h.execute(&default_interceptor()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transformation);
    assert!(err.message().contains("telephone1"));
    assert_eq!(h.target(), &record);
}

struct Reject;

impl AttributeTransform for Reject {
    fn name(&self) -> &str {
        "reject"
    }

    fn apply(&self, _value: &Value) -> Result<Value, TransformFailure> {
        Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "normalization service timed out",
        )))
    }
}

#[test]
fn test_injected_failure_surfaces_normalized() {
    let interceptor = default_interceptor().with_transform(Reject);
    let mut h = Harness::for_target(contact("555-abc"));

    let err = h.execute(&interceptor).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transformation);
    assert!(err.message().ends_with("normalization service timed out"));
    assert_eq!(h.attribute("telephone1"), Some(&Value::from("555-abc")));
}

// =============================================================================
// PROPERTIES
// =============================================================================

fn phone_text() -> impl Strategy<Value = String> {
    "[0-9a-zA-Z +().-]{0,20}"
}

proptest! {
    #[test]
    fn trigger_present_uppercases(phone in phone_text()) {
        let mut h = Harness::for_target(contact(phone.as_str()));
        h.execute(&default_interceptor()).unwrap();
        prop_assert_eq!(h.attribute("telephone1"), Some(&Value::from(phone.to_uppercase())));
    }

    #[test]
    fn trigger_absent_changes_nothing(phone in phone_text(), n in any::<i64>()) {
        let record = contact_without_trigger(phone.as_str()).with_attribute("numberofchildren", n);
        let mut h = Harness::for_target(record.clone());
        h.execute(&default_interceptor()).unwrap();
        prop_assert_eq!(h.target(), &record);
        prop_assert!(h.shared.is_empty());
    }
}
