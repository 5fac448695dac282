//! Host input parameters
//!
//! The host hands the interceptor a bag of named input parameters. For a
//! create or update, the record being written travels under [`TARGET`].

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, Result};
use crate::record::Record;
use crate::value::Value;

/// Input parameter carrying the record being created or updated.
pub const TARGET: &str = "Target";

/// Named input parameters supplied by the host, in name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, Value>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for a create/update of `target`
    pub fn for_target(target: Record) -> Self {
        let mut params = Self::new();
        params.insert(TARGET, target);
        params
    }

    /// Add a parameter (builder style)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// The target record, validated.
    ///
    /// Fails with `InvalidTarget` when the parameter is absent, is not a
    /// record, or is a record without a logical name.
    pub fn target(&self) -> Result<&Record> {
        let value = self.0.get(TARGET).ok_or_else(no_target)?;
        let record = value.as_record().ok_or_else(|| wrong_shape(value))?;
        check_logical_name(record)?;
        Ok(record)
    }

    /// Mutable access to the validated target record.
    pub fn target_mut(&mut self) -> Result<&mut Record> {
        let value = self.0.get_mut(TARGET).ok_or_else(no_target)?;
        let type_name = value.type_name();
        let record = value.as_record_mut().ok_or_else(|| RecordError::InvalidTarget {
            reason: format!("target parameter is {}, expected Record", type_name),
        })?;
        check_logical_name(record)?;
        Ok(record)
    }

    /// Take the target out, leaving the parameter absent.
    pub fn take_target(&mut self) -> Result<Record> {
        self.target()?;
        match self.0.remove(TARGET) {
            Some(Value::Record(record)) => Ok(*record),
            _ => Err(no_target()),
        }
    }
}

fn no_target() -> RecordError {
    RecordError::InvalidTarget {
        reason: "no target found".to_string(),
    }
}

fn wrong_shape(value: &Value) -> RecordError {
    RecordError::InvalidTarget {
        reason: format!("target parameter is {}, expected Record", value.type_name()),
    }
}

fn check_logical_name(record: &Record) -> Result<()> {
    if record.logical_name().trim().is_empty() {
        return Err(RecordError::InvalidTarget {
            reason: "target record has no logical name".to_string(),
        });
    }
    Ok(())
}

impl FromIterator<(String, Value)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
