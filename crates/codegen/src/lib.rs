//! # Seedsnap Codegen
//!
//! The seed file writer: turns a model registry plus a row source into an
//! ActiveRecord-executable seed script.
//!
//! The generated artifact is plain Ruby — `Model.create(...)` statements
//! inside a transaction, one per row, with deterministic attribute order
//! so consecutive runs against an unchanged database are byte-identical
//! and diff cleanly.
//!

// ============================================================================
// Modules
// ============================================================================

pub mod encode;
pub mod stream;
pub mod writer;

// ============================================================================
// Re-exports
// ============================================================================

pub use stream::SeedStream;
pub use writer::{SeedReport, SeedWriter};

use seedsnap_core::Environment;

// ============================================================================
// WriterConfig
// ============================================================================

/// Configuration for the seed file writer
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Whether seed file regeneration is enabled at all
    pub update_enabled: bool,

    /// Strip primary keys from emitted statements and skip the
    /// sequence-reset statements
    pub ignore_ids: bool,

    /// Emit `create!` (raise on invalid records) instead of `create`
    pub strict_create: bool,

    /// Database name for an `ActiveRecord::Base.connected_to` wrapper
    /// block, if the seeds target a named database
    pub target_database: Option<String>,

    /// The environment the tool is running in; generation is restricted
    /// to development
    pub environment: Environment,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            update_enabled: true,
            ignore_ids: false,
            strict_create: false,
            target_database: None,
            environment: Environment::Development,
        }
    }
}

impl WriterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable seed file regeneration
    pub fn without_updates(mut self) -> Self {
        self.update_enabled = false;
        self
    }

    /// Strip primary keys from the generated statements
    pub fn ignoring_ids(mut self) -> Self {
        self.ignore_ids = true;
        self
    }

    /// Use `create!` instead of `create`
    pub fn with_strict_create(mut self) -> Self {
        self.strict_create = true;
        self
    }

    /// Wrap the seeds in a `connected_to` block for the named database
    pub fn with_target_database(mut self, name: impl Into<String>) -> Self {
        self.target_database = Some(name.into());
        self
    }

    /// Set the environment the writer should assume
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// The precondition gate: generation only proceeds when updates are
    /// enabled and the environment is development-like.
    pub fn permits_generation(&self) -> bool {
        self.update_enabled && self.environment.is_development()
    }

    /// The record-construction method to emit
    pub fn create_method(&self) -> &'static str {
        if self.strict_create { "create!" } else { "create" }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = WriterConfig::default();
        assert!(config.update_enabled);
        assert!(!config.ignore_ids);
        assert!(!config.strict_create);
        assert!(config.target_database.is_none());
        assert!(config.permits_generation());
    }

    #[test]
    fn test_config_builder() {
        let config = WriterConfig::new()
            .ignoring_ids()
            .with_strict_create()
            .with_target_database(":animals");

        assert!(config.ignore_ids);
        assert!(config.strict_create);
        assert_eq!(config.target_database.as_deref(), Some(":animals"));
    }

    #[test]
    fn test_gate_requires_updates_enabled() {
        let config = WriterConfig::new().without_updates();
        assert!(!config.permits_generation());
    }

    #[test]
    fn test_gate_requires_development() {
        let config = WriterConfig::new().with_environment(Environment::Production);
        assert!(!config.permits_generation());

        let config = WriterConfig::new().with_environment(Environment::Test);
        assert!(!config.permits_generation());
    }

    #[test]
    fn test_create_method() {
        assert_eq!(WriterConfig::new().create_method(), "create");
        assert_eq!(
            WriterConfig::new().with_strict_create().create_method(),
            "create!"
        );
    }
}
