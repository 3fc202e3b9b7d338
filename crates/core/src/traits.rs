//! Core traits for seedsnap
//!
//! This module defines the seams between the registry, the snapshot, and
//! the seed file writer: validation, JSON persistence, and the two
//! collaborators the writer consumes — a per-model row source and a
//! migration-version lookup.

use crate::error::{SeedError, SeedResult};
use crate::types::Row;
use serde::{Serialize, de::DeserializeOwned};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use seedsnap_core::{Validatable, SeedResult, SeedError};
///
/// struct Entry {
///     model: String,
/// }
///
/// impl Validatable for Entry {
///     fn validate(&self) -> SeedResult<()> {
///         if self.model.is_empty() {
///             return Err(SeedError::validation("Model name cannot be empty"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `SeedError` describing the problem.
    fn validate(&self) -> SeedResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Persistable Trait
// ============================================================================

/// Trait for types that can be serialized to and deserialized from files
///
/// Types implementing this trait can be saved to and loaded from
/// JSON files (snapshots, registries).
pub trait Persistable: Serialize + DeserializeOwned + Sized {
    /// Get the file extension for this type (without the dot)
    fn file_extension() -> &'static str;

    /// Save to a JSON string
    fn to_json(&self) -> SeedResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Load from a JSON string
    fn from_json(json: &str) -> SeedResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Save to a file
    fn save_to_file(&self, path: &std::path::Path) -> SeedResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| SeedError::FileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from a file
    fn load_from_file(path: &std::path::Path) -> SeedResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| SeedError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }
}

// ============================================================================
// RowSource Trait
// ============================================================================

/// Per-model row fetch capability consumed by the seed file writer.
///
/// An implementation returns every persisted row of the named model (a
/// full scan). The writer itself orders rows by primary key, so sources
/// need not guarantee any particular ordering.
pub trait RowSource {
    /// Fetch all rows for the given model name.
    ///
    /// Returns an error when the model is unknown to the source — a
    /// registered model with no backing rows is a configuration mistake,
    /// not something to skip silently.
    fn rows_for(&self, model: &str) -> SeedResult<Vec<Row>>;
}

// ============================================================================
// MigrationLog Trait
// ============================================================================

/// Lookup for the most recently applied migration version.
///
/// The seed file's trailing bootstrap marker records this version so a
/// database seeded from the file is considered already migrated to it.
pub trait MigrationLog {
    /// The identifier of the last applied migration, if any migrations
    /// have been applied.
    fn last_version(&self) -> Option<String>;
}

// ============================================================================
// Tests
// ============================================================================
