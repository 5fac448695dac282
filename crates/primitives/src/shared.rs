//! Shared variables
//!
//! A small key-value store that lives for one logical operation and is seen
//! by every stage the host invokes for it. Stages run one at a time, so the
//! store needs no locking. Callers that want "first stage wins" check
//! [`SharedVariableStore::has`] before [`SharedVariableStore::put`].

use std::collections::btree_map;
use std::collections::BTreeMap;

use recordgate_core::{OperationId, RecordError, Result, Value};

/// Per-operation key-value store.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedVariableStore {
    operation: OperationId,
    vars: BTreeMap<String, Value>,
}

impl SharedVariableStore {
    /// Empty store for the operation `operation`
    pub fn new(operation: OperationId) -> Self {
        Self {
            operation,
            vars: BTreeMap::new(),
        }
    }

    /// Operation this store belongs to
    pub fn operation_id(&self) -> OperationId {
        self.operation
    }

    /// True if some stage has set `key`
    pub fn has(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Value of `key`; `MissingVariable` if unset
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.vars
            .get(key)
            .ok_or_else(|| RecordError::MissingVariable {
                key: key.to_string(),
            })
    }

    /// Insert or overwrite `key`, returning the previous value
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.vars.insert(key.into(), value.into())
    }

    /// Number of variables set
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True when no stage has set anything
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate variables in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.vars.iter()
    }
}

impl Default for SharedVariableStore {
    fn default() -> Self {
        Self::new(OperationId::new())
    }
}
