//! Error Normalization Tests
//!
//! Whatever goes wrong inside execute, the host sees one `InterceptorError`
//! with a stable code and the root-cause message.

use crate::*;
use recordgate::{AttributeTransform, ErrorKind, TransformFailure};

struct Explode;

impl AttributeTransform for Explode {
    fn name(&self) -> &str {
        "explode"
    }

    fn apply(&self, _value: &Value) -> Result<Value, TransformFailure> {
        panic!("unreachable branch in formatter")
    }
}

#[test]
fn test_panic_becomes_unexpected() {
    let interceptor = default_interceptor().with_transform(Explode);
    let mut h = Harness::for_target(contact("555-abc"));

    let err = h.execute(&interceptor).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert_eq!(err.message(), "unreachable branch in formatter");
    assert_eq!(h.attribute("telephone1"), Some(&Value::from("555-abc")));
}

#[test]
fn test_failure_stops_before_shared_variables() {
    let mut h = Harness::for_target(contact(12i64));

    h.execute(&default_interceptor()).unwrap_err();
    assert!(h.shared.is_empty());
    assert!(h.sink.matching("missing snapshot").is_empty());
}

#[test]
fn test_wire_error_codes() {
    let cases = [
        (Parameters::new(), "InvalidTarget"),
        (Parameters::for_target(contact(12i64)), "Transformation"),
    ];
    for (params, code) in cases {
        let mut h = Harness::new(params);
        let wire = h.execute(&default_interceptor()).unwrap_err().to_wire_error();
        assert_eq!(wire.code, code);
        assert!(!wire.message.is_empty());
    }
}

#[test]
fn test_wire_error_json_shape() {
    let mut h = Harness::new(Parameters::new());
    let json = h.execute(&default_interceptor()).unwrap_err().to_wire_error().to_json();

    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["code"], "InvalidTarget");
    assert_eq!(v["message"], "invalid target: no target found");
}

#[test]
fn test_error_is_std_error() {
    let mut h = Harness::new(Parameters::new());
    let err: Box<dyn std::error::Error> = Box::new(h.execute(&default_interceptor()).unwrap_err());
    assert_eq!(err.to_string(), "invalid target: no target found");
}
