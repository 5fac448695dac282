//! Attribute transforms

use recordgate_core::Value;

/// Error returned by a transform. Its message becomes the reason of the
/// resulting `Transformation` error.
pub type TransformFailure = Box<dyn std::error::Error + Send + Sync>;

/// Pure conversion applied to the transform attribute.
pub trait AttributeTransform: Send + Sync {
    fn name(&self) -> &str;

    /// Compute the replacement value. Must not depend on anything but `value`.
    fn apply(&self, value: &Value) -> Result<Value, TransformFailure>;
}

/// Uppercases text values. Non-text values cannot be transformed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UppercaseText;

impl AttributeTransform for UppercaseText {
    fn name(&self) -> &str {
        "uppercase"
    }

    fn apply(&self, value: &Value) -> Result<Value, TransformFailure> {
        match value {
            Value::String(s) => Ok(Value::String(s.to_uppercase())),
            other => Err(format!("expected String, got {}", other.type_name()).into()),
        }
    }
}
