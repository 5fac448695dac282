//! Trace rendering of values

use std::borrow::Cow;

use recordgate_core::Value;

/// Marker traced for an absent value
pub const NULL_MARKER: &str = "NULL";

/// Render a value for a trace line.
///
/// Records and references show their logical name. Absent values show
/// [`NULL_MARKER`]. Everything else uses its natural text form.
pub fn describe(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(NULL_MARKER),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Reference(_) | Value::Record(_) => {
            Cow::Borrowed(value.logical_name().unwrap_or_default())
        }
        other => Cow::Owned(other.to_string()),
    }
}

/// `name | value` line used for parameter and attribute dumps
pub fn pair_line(name: &str, value: &Value) -> String {
    format!("{} | {}", name, describe(value))
}
