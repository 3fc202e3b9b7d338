//! Database snapshots
//!
//! A `Snapshot` is a captured database state: the full row set of each
//! model of interest, the capture timestamp, and the version of the last
//! applied migration. It is the file-backed implementation of the
//! writer's two collaborators, `RowSource` and `MigrationLog`.

use chrono::{DateTime, Utc};
use seedsnap_core::{MigrationLog, Persistable, Row, RowSource, SeedError, SeedResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Snapshot
// ============================================================================

/// A captured database state, serializable to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// When the snapshot was captured
    pub captured_at: DateTime<Utc>,

    /// Identifier of the most recently applied migration at capture time
    pub last_migration: Option<String>,

    /// Rows per model name. A `BTreeMap` keeps serialized snapshots
    /// diff-friendly.
    tables: BTreeMap<String, Vec<Row>>,
}

impl Snapshot {
    /// Create an empty snapshot captured now
    pub fn new() -> Self {
        Self {
            captured_at: Utc::now(),
            last_migration: None,
            tables: BTreeMap::new(),
        }
    }

    /// Set the last applied migration version
    pub fn with_last_migration(mut self, version: impl Into<String>) -> Self {
        self.last_migration = Some(version.into());
        self
    }

    /// Replace the row set for a model
    pub fn insert_rows(&mut self, model: impl Into<String>, rows: Vec<Row>) {
        self.tables.insert(model.into(), rows);
    }

    /// Append one row to a model's row set
    pub fn add_row(&mut self, model: impl Into<String>, row: Row) {
        self.tables.entry(model.into()).or_default().push(row);
    }

    /// Builder form of [`insert_rows`](Snapshot::insert_rows)
    pub fn with_rows(mut self, model: impl Into<String>, rows: Vec<Row>) -> Self {
        self.insert_rows(model, rows);
        self
    }

    /// Model names present in the snapshot
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Whether the snapshot holds rows for the given model
    pub fn contains(&self, model: &str) -> bool {
        self.tables.contains_key(model)
    }

    /// Total number of rows across all models
    pub fn row_count(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSource for Snapshot {
    fn rows_for(&self, model: &str) -> SeedResult<Vec<Row>> {
        self.tables
            .get(model)
            .cloned()
            .ok_or_else(|| SeedError::ModelNotFound(model.to_string()))
    }
}

impl MigrationLog for Snapshot {
    fn last_version(&self) -> Option<String> {
        self.last_migration.clone()
    }
}

impl Persistable for Snapshot {
    fn file_extension() -> &'static str {
        "json"
    }
}

// ============================================================================
// Tests
// ============================================================================
