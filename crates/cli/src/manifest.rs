//! Seed manifests
//!
//! The manifest is the TOML file users edit: which models to seed, which
//! attributes to include, and the writer settings. It is the file-backed
//! form of the registry plus the writer configuration.
//!
//! ```toml
//! seeds_file = "db/seeds.rb"
//!
//! [settings]
//! ignore_ids = false
//! strict_create = true
//! target_database = ":primary"
//!
//! [[models]]
//! model = "User"
//! attributes = ["id", "name", "email"]
//!
//! [[models]]
//! model = "Person"
//! table = "people"
//! attributes = ["id", "name"]
//! ```

use seedsnap_codegen::WriterConfig;
use seedsnap_core::{Environment, SeedError, SeedResult};
use seedsnap_registry::{ModelDescriptor, RegisterEntry, Registry};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ============================================================================
// Manifest
// ============================================================================

/// A parsed seed manifest
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Output path for the generated seed file
    #[serde(default)]
    pub seeds_file: Option<PathBuf>,

    /// Writer settings
    #[serde(default)]
    pub settings: Settings,

    /// Models to seed, in emission order
    #[serde(default)]
    pub models: Vec<ModelSpec>,
}

/// Writer settings section of the manifest
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether seed file regeneration is enabled
    pub update_enabled: bool,

    /// Strip primary keys and skip sequence resets
    pub ignore_ids: bool,

    /// Emit `create!` instead of `create`
    pub strict_create: bool,

    /// Database name for a `connected_to` wrapper block
    pub target_database: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            update_enabled: true,
            ignore_ids: false,
            strict_create: false,
            target_database: None,
        }
    }
}

/// One model declaration in the manifest
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSpec {
    /// Model constant name (e.g. "User")
    pub model: String,

    /// Table name override; derived from the model name when omitted
    #[serde(default)]
    pub table: Option<String>,

    /// Primary-key attribute override (defaults to "id")
    #[serde(default)]
    pub primary_key: Option<String>,

    /// Attributes allowed into the seed file
    pub attributes: Vec<String>,
}

impl Manifest {
    /// Load and parse a manifest file
    pub fn load(path: &Path) -> SeedResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| SeedError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| SeedError::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Build the model registry declared by this manifest
    pub fn registry(&self) -> Registry {
        let mut registry = Registry::new();
        for spec in &self.models {
            let mut model = ModelDescriptor::new(&spec.model);
            if let Some(table) = &spec.table {
                model = model.with_table_name(table);
            }
            if let Some(primary_key) = &spec.primary_key {
                model = model.with_primary_key(primary_key);
            }
            registry.register(
                RegisterEntry::new(model).with_attributes(spec.attributes.iter().cloned()),
            );
        }
        registry
    }

    /// Build the writer configuration for the given environment
    pub fn writer_config(&self, environment: Environment) -> WriterConfig {
        WriterConfig {
            update_enabled: self.settings.update_enabled,
            ignore_ids: self.settings.ignore_ids,
            strict_create: self.settings.strict_create,
            target_database: self.settings.target_database.clone(),
            environment,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
seeds_file = "db/seeds.rb"

[settings]
ignore_ids = true
strict_create = true
target_database = ":animals"

[[models]]
model = "User"
attributes = ["id", "name", "email"]

[[models]]
model = "Person"
table = "people"
primary_key = "person_id"
attributes = ["person_id", "name"]
"#;

    #[test]
    fn test_parse_sample() {
        let manifest: Manifest = toml::from_str(SAMPLE).unwrap();
        assert_eq!(manifest.seeds_file.as_deref(), Some(Path::new("db/seeds.rb")));
        assert!(manifest.settings.ignore_ids);
        assert!(manifest.settings.strict_create);
        assert!(manifest.settings.update_enabled, "defaults to enabled");
        assert_eq!(manifest.models.len(), 2);
    }

    #[test]
    fn test_registry_built_in_order() {
        let manifest: Manifest = toml::from_str(SAMPLE).unwrap();
        let registry = manifest.registry();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.entries()[0].model.name, "User");
        assert_eq!(registry.entries()[0].model.table_name, "users");
        assert_eq!(registry.entries()[1].model.table_name, "people");
        assert_eq!(registry.entries()[1].model.primary_key, "person_id");
    }

    #[test]
    fn test_writer_config() {
        let manifest: Manifest = toml::from_str(SAMPLE).unwrap();
        let config = manifest.writer_config(Environment::Development);

        assert!(config.ignore_ids);
        assert!(config.strict_create);
        assert_eq!(config.target_database.as_deref(), Some(":animals"));
        assert!(config.permits_generation());
    }

    #[test]
    fn test_minimal_manifest() {
        let manifest: Manifest = toml::from_str(
            r#"
[[models]]
model = "Widget"
attributes = ["id"]
"#,
        )
        .unwrap();

        assert!(manifest.seeds_file.is_none());
        assert!(!manifest.settings.ignore_ids);
        assert_eq!(manifest.registry().entries()[0].model.table_name, "widgets");
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seeds.toml");
        std::fs::write(&path, "models = 3").unwrap();

        let err = Manifest::load(&path).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Manifest::load(Path::new("/nonexistent/seeds.toml")).unwrap_err();
        assert!(err.is_io());
    }
}
