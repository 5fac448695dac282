//! Record views
//!
//! A [`RecordView`] borrows a [`Record`] either exclusively (the target of the
//! current operation) or shared (a pre-image). The borrow makes ownership
//! explicit: the target is handed to the interceptor for one call and the host
//! gets it back, mutated in place, when the borrow ends.

use std::collections::btree_map;

use crate::error::{RecordError, Result};
use crate::record::Record;
use crate::value::Value;

/// Whether a view permits writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    ReadWrite,
    ReadOnly,
}

enum Access<'a> {
    ReadWrite(&'a mut Record),
    ReadOnly(&'a Record),
}

/// Read/write view over one record's attributes.
pub struct RecordView<'a> {
    access: Access<'a>,
}

impl<'a> RecordView<'a> {
    /// Mutable view; used for the target
    pub fn writable(record: &'a mut Record) -> Self {
        Self {
            access: Access::ReadWrite(record),
        }
    }

    /// Immutable view; used for pre-images
    pub fn read_only(record: &'a Record) -> Self {
        Self {
            access: Access::ReadOnly(record),
        }
    }

    fn record(&self) -> &Record {
        match &self.access {
            Access::ReadWrite(r) => r,
            Access::ReadOnly(r) => r,
        }
    }

    pub fn access_mode(&self) -> AccessMode {
        match self.access {
            Access::ReadWrite(_) => AccessMode::ReadWrite,
            Access::ReadOnly(_) => AccessMode::ReadOnly,
        }
    }

    pub fn logical_name(&self) -> &str {
        self.record().logical_name()
    }

    /// True iff the attribute key is present (presence, not nullness)
    pub fn has(&self, name: &str) -> bool {
        self.record().contains(name)
    }

    /// Attribute value; `MissingAttribute` if absent
    pub fn get(&self, name: &str) -> Result<&Value> {
        let record = self.record();
        record
            .attribute(name)
            .ok_or_else(|| RecordError::MissingAttribute {
                record: record.logical_name().to_string(),
                attribute: name.to_string(),
            })
    }

    /// Insert or overwrite an attribute; `ReadOnlyView` on immutable views
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        match &mut self.access {
            Access::ReadWrite(record) => {
                record.insert(name, value);
                Ok(())
            }
            Access::ReadOnly(record) => Err(RecordError::ReadOnlyView {
                record: record.logical_name().to_string(),
                attribute: name.to_string(),
            }),
        }
    }

    /// Attributes in name order. Each call starts a fresh pass.
    pub fn iter(&self) -> Attributes<'_> {
        Attributes {
            inner: self.record().attributes(),
        }
    }

    pub fn len(&self) -> usize {
        self.record().len()
    }

    pub fn is_empty(&self) -> bool {
        self.record().is_empty()
    }
}

impl std::fmt::Debug for RecordView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordView")
            .field("access_mode", &self.access_mode())
            .field("record", self.record())
            .finish()
    }
}

/// Iterator over `(name, value)` pairs of a view.
#[derive(Clone)]
pub struct Attributes<'a> {
    inner: btree_map::Iter<'a, String, Value>,
}

impl<'a> Iterator for Attributes<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Attributes<'_> {}
