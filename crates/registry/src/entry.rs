//! Register entries
//!
//! A `RegisterEntry` pairs a model descriptor with the set of attribute
//! names allowed into the seed file. Entries are built once, registered,
//! and then consumed read-only by the writer.

use crate::model::ModelDescriptor;
use seedsnap_core::{AttributeSet, SeedError, SeedResult, Validatable};
use serde::{Deserialize, Serialize};

// ============================================================================
// RegisterEntry
// ============================================================================

/// A declared (model, attribute-subset) pair to include in the seed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterEntry {
    /// The model whose rows are emitted
    pub model: ModelDescriptor,

    /// Attribute names allowed into the emitted statements, stored sorted
    pub attributes: AttributeSet,
}

impl RegisterEntry {
    /// Create an entry for a model with an empty attribute set
    pub fn new(model: ModelDescriptor) -> Self {
        Self {
            model,
            attributes: AttributeSet::new(),
        }
    }

    /// Add a single allowed attribute
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.insert(name.into());
        self
    }

    /// Add several allowed attributes
    pub fn with_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Whether the given attribute is allowed into the seed file
    pub fn includes(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }
}

impl Validatable for RegisterEntry {
    fn validate(&self) -> SeedResult<()> {
        self.model.validate()?;
        if self.attributes.is_empty() {
            return Err(SeedError::entry_validation(
                &self.model.name,
                "No attributes registered",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
