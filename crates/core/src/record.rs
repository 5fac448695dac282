//! Business record payloads
//!
//! A [`Record`] is the owned data behind every view: a logical type name, an
//! optional identifier, and the attributes carried by this payload. The target
//! of a create/update holds only the attributes being set; a pre-image holds
//! only the attributes the registration asked for.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value::{RecordRef, Value};

/// Owned record payload.
///
/// Attribute names are case-sensitive and unique. Attributes are kept in a
/// `BTreeMap` so that trace output is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    logical_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    #[serde(default)]
    attributes: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record of type `logical_name`
    pub fn new(logical_name: impl Into<String>) -> Self {
        Self {
            logical_name: logical_name.into(),
            id: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Set the record identifier (builder style)
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Add an attribute (builder style)
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Logical type name, e.g. `contact`
    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    /// Record identifier; `None` for a create that has not been assigned one
    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    /// Reference to this record, if it has an identifier
    pub fn to_reference(&self) -> Option<RecordRef> {
        self.id.map(|id| RecordRef::new(self.logical_name.clone(), id))
    }

    /// Presence check (a `Null` attribute is present)
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Attribute value, if present
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Insert or overwrite an attribute, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Remove an attribute, returning its value
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.attributes.remove(name)
    }

    /// Number of attributes carried
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True when no attributes are carried
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate attributes in name order
    pub fn attributes(&self) -> btree_map::Iter<'_, String, Value> {
        self.attributes.iter()
    }
}
