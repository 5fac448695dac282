//! Attribute value types
//!
//! Record attributes are untyped at the host boundary. Every attribute, input
//! parameter and shared variable carries a [`Value`], a tagged union that makes
//! presence and type mismatch explicit instead of relying on runtime casts.
//!
//! ## Equality Rules
//!
//! - Different variants are NEVER equal (no coercion)
//! - `Int(1)` != `Decimal(1.0)`
//! - `Decimal` uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Record;

/// Canonical attribute value.
///
/// ## Variants
///
/// 1. `Null` - attribute present but cleared
/// 2. `Bool` - two-option attribute
/// 3. `Int` - whole number
/// 4. `Decimal` - floating point number (money, decimal, double)
/// 5. `String` - text
/// 6. `DateTime` - UTC timestamp
/// 7. `Reference` - lookup to another record
/// 8. `Record` - embedded record (the `Target` input parameter is one)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Present but empty
    Null,

    /// Boolean true or false
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE-754 floating point
    Decimal(f64),

    /// UTF-8 text
    String(String),

    /// Point in time, always UTC
    DateTime(DateTime<Utc>),

    /// Reference to another record
    Reference(RecordRef),

    /// Embedded record
    Record(Box<Record>),
}

impl Value {
    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Decimal(_) => "Decimal",
            Value::String(_) => "String",
            Value::DateTime(_) => "DateTime",
            Value::Reference(_) => "Reference",
            Value::Record(_) => "Record",
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Value::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as timestamp
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get as record reference
    pub fn as_reference(&self) -> Option<&RecordRef> {
        match self {
            Value::Reference(r) => Some(r),
            _ => None,
        }
    }

    /// Try to get as embedded record
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Try to get as mutable embedded record
    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Logical type name for structured values.
    ///
    /// Records and references name the record type they point at; scalars
    /// have none.
    pub fn logical_name(&self) -> Option<&str> {
        match self {
            Value::Reference(r) => Some(r.logical_name()),
            Value::Record(r) => Some(r.logical_name()),
            _ => None,
        }
    }
}

/// Default string conversion.
///
/// `Null` renders as the empty string; callers that need a visible marker
/// handle it before formatting.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::String(s) => f.write_str(s),
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Value::Reference(r) => write!(f, "{}", r),
            Value::Record(r) => f.write_str(r.logical_name()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt)
    }
}

impl From<RecordRef> for Value {
    fn from(r: RecordRef) -> Self {
        Value::Reference(r)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(Box::new(r))
    }
}

/// Reference to another record: its logical type name and identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordRef {
    logical_name: String,
    id: Uuid,
}

impl RecordRef {
    /// Create a reference to the record `id` of type `logical_name`
    pub fn new(logical_name: impl Into<String>, id: Uuid) -> Self {
        Self {
            logical_name: logical_name.into(),
            id,
        }
    }

    /// Logical name of the referenced record type
    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    /// Identifier of the referenced record
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.logical_name, self.id)
    }
}
