//! Pre-image snapshots
//!
//! Snapshots capture selected attributes of a record as they were before the
//! current operation. Each one is addressed by a name agreed when the stage
//! was registered. The host may supply none of them: a create has no prior
//! state, and not every registration asks for every name.

use std::collections::BTreeMap;

use recordgate_core::{Record, RecordError, RecordView, Result};
use serde::{Deserialize, Serialize};

/// Read-only, named collection of pre-image records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotStore {
    images: BTreeMap<String, Record>,
}

impl SnapshotStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snapshot (builder style). Hosts populate the store before the
    /// first stage runs; interceptors only ever read it.
    pub fn with(mut self, name: impl Into<String>, image: Record) -> Self {
        self.images.insert(name.into(), image);
        self
    }

    /// Add or replace a snapshot
    pub fn insert(&mut self, name: impl Into<String>, image: Record) {
        self.images.insert(name.into(), image);
    }

    /// True if the host supplied `name`
    pub fn has_snapshot(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Immutable view over the named snapshot
    ///
    /// Fails with `MissingSnapshot` if the host did not supply it.
    pub fn snapshot(&self, name: &str) -> Result<RecordView<'_>> {
        self.images
            .get(name)
            .map(RecordView::read_only)
            .ok_or_else(|| RecordError::MissingSnapshot {
                name: name.to_string(),
            })
    }

    /// Supplied snapshot names, in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }

    /// Number of supplied snapshots
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// True when the host supplied no snapshots
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
