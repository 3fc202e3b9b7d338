//! The model registry
//!
//! An ordered list of register entries. Registration order is emission
//! order in the generated seed file, so the registry is a `Vec`, not a
//! map. Re-registering a model replaces its previous entry in place.

use crate::entry::RegisterEntry;
use seedsnap_core::{SeedResult, Validatable};
use serde::{Deserialize, Serialize};

// ============================================================================
// Registry
// ============================================================================

/// Ordered collection of register entries consumed by the seed writer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    entries: Vec<RegisterEntry>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry.
    ///
    /// A later registration for the same model supersedes the earlier one,
    /// keeping the original position in the emission order.
    pub fn register(&mut self, entry: RegisterEntry) {
        match self
            .entries
            .iter()
            .position(|e| e.model.name == entry.model.name)
        {
            Some(index) => {
                tracing::debug!(model = %entry.model.name, "replacing register entry");
                self.entries[index] = entry;
            }
            None => self.entries.push(entry),
        }
    }

    /// Register an entry using builder pattern
    pub fn with_entry(mut self, entry: RegisterEntry) -> Self {
        self.register(entry);
        self
    }

    /// All entries in registration order
    pub fn entries(&self) -> &[RegisterEntry] {
        &self.entries
    }

    /// Find an entry by model name
    pub fn find(&self, model: &str) -> Option<&RegisterEntry> {
        self.entries.iter().find(|e| e.model.name == model)
    }

    /// Number of registered models
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no models are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Validatable for Registry {
    fn validate(&self) -> SeedResult<()> {
        for entry in &self.entries {
            entry.validate()?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a RegisterEntry;
    type IntoIter = std::slice::Iter<'a, RegisterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelDescriptor;

    fn entry(model: &str, attrs: &[&str]) -> RegisterEntry {
        RegisterEntry::new(ModelDescriptor::new(model)).with_attributes(attrs.iter().copied())
    }

    #[test]
    fn test_registration_order_preserved() {
        let registry = Registry::new()
            .with_entry(entry("User", &["id", "name"]))
            .with_entry(entry("Product", &["id", "sku"]))
            .with_entry(entry("Order", &["id", "total"]));

        let names: Vec<&str> = registry
            .entries()
            .iter()
            .map(|e| e.model.name.as_str())
            .collect();
        assert_eq!(names, ["User", "Product", "Order"]);
    }

    #[test]
    fn test_reregistration_replaces_in_place() {
        let mut registry = Registry::new();
        registry.register(entry("User", &["id"]));
        registry.register(entry("Product", &["id"]));
        registry.register(entry("User", &["id", "name", "email"]));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.entries()[0].model.name, "User");
        assert_eq!(registry.entries()[0].attributes.len(), 3);
    }

    #[test]
    fn test_find() {
        let registry = Registry::new().with_entry(entry("User", &["id"]));
        assert!(registry.find("User").is_some());
        assert!(registry.find("Ghost").is_none());
    }

    #[test]
    fn test_validate_aggregates_entries() {
        let mut registry = Registry::new().with_entry(entry("User", &["id"]));
        assert!(registry.is_valid());

        registry.register(RegisterEntry::new(ModelDescriptor::new("Empty")));
        assert!(!registry.is_valid());
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.is_valid());
    }
}
