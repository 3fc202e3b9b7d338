//! # Seedsnap CLI
//!
//! Command-line pipeline for seedsnap.
//!
//! Wires the pieces together: load the TOML manifest (models, attributes,
//! writer settings), load the JSON snapshot (rows, last migration),
//! resolve the environment, and run the seed file writer.
//!
//! ## Usage
//!
//! ```text
//! seedsnap <manifest.toml> <snapshot.json> [output]
//! ```
//!

pub mod manifest;

// Re-export the workspace crates for use in main.rs
pub use seedsnap_codegen;
pub use seedsnap_core;
pub use seedsnap_registry;

pub use manifest::Manifest;

use anyhow::Context;
use seedsnap_codegen::SeedWriter;
use seedsnap_core::{Environment, Persistable, Validatable};
use seedsnap_registry::Snapshot;
use std::path::PathBuf;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Default output path when neither the command line nor the manifest
/// names one
pub const DEFAULT_SEEDS_FILE: &str = "db/seeds.rb";

/// Usage text printed on `--help` and argument errors
pub const USAGE: &str = "\
Usage: seedsnap <manifest.toml> <snapshot.json> [output]

Arguments:
  <manifest.toml>   Models, attributes, and writer settings (TOML)
  <snapshot.json>   Captured database rows and last migration (JSON)
  [output]          Seed file to write (default: manifest seeds_file,
                    then db/seeds.rb)

Environment:
  SEEDSNAP_ENV      development | test | production (default: development)
  RUST_LOG          Log filter (default: info)";

// ============================================================================
// CliOptions
// ============================================================================

/// Parsed command-line options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    /// Path to the manifest file
    pub manifest: PathBuf,

    /// Path to the snapshot file
    pub snapshot: PathBuf,

    /// Output path override
    pub output: Option<PathBuf>,
}

impl CliOptions {
    /// Parse options from the argument list (without the program name).
    ///
    /// Returns a human-readable message on bad arguments.
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut positional: Vec<String> = Vec::new();
        for arg in args {
            if arg.starts_with('-') {
                return Err(format!("unknown option '{arg}'"));
            }
            positional.push(arg);
        }

        let mut positional = positional.into_iter();
        let manifest = positional
            .next()
            .ok_or("missing required <manifest.toml> argument")?;
        let snapshot = positional
            .next()
            .ok_or("missing required <snapshot.json> argument")?;
        let output = positional.next();
        if let Some(extra) = positional.next() {
            return Err(format!("unexpected argument '{extra}'"));
        }

        Ok(Self {
            manifest: PathBuf::from(manifest),
            snapshot: PathBuf::from(snapshot),
            output: output.map(PathBuf::from),
        })
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Run one generation pass from the given options.
pub fn run(options: &CliOptions) -> anyhow::Result<()> {
    let manifest = Manifest::load(&options.manifest).context("loading manifest")?;
    let snapshot = Snapshot::load_from_file(&options.snapshot).context("loading snapshot")?;

    let registry = manifest.registry();
    registry.validate().context("validating manifest models")?;

    tracing::info!(
        models = registry.len(),
        rows = snapshot.row_count(),
        captured_at = %snapshot.captured_at,
        "inputs loaded",
    );

    let environment = Environment::from_env().context("resolving environment")?;
    let config = manifest.writer_config(environment);

    let output = options
        .output
        .clone()
        .or_else(|| manifest.seeds_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SEEDS_FILE));

    let writer = SeedWriter::new(config);
    match writer.create(&output, &registry, &snapshot, &snapshot)? {
        Some(report) => {
            tracing::info!(
                path = %output.display(),
                models = report.models,
                statements = report.statements,
                "seed file generated",
            );
        }
        None => {
            tracing::info!(
                environment = %environment,
                "seed generation skipped (updates disabled or not a development environment)",
            );
        }
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use seedsnap_core::Row;
    use serde_json::json;

    #[test]
    fn test_from_args_full() {
        let options = CliOptions::from_args(
            ["seeds.toml", "snapshot.json", "out.rb"]
                .map(String::from),
        )
        .unwrap();
        assert_eq!(options.manifest, PathBuf::from("seeds.toml"));
        assert_eq!(options.snapshot, PathBuf::from("snapshot.json"));
        assert_eq!(options.output, Some(PathBuf::from("out.rb")));
    }

    #[test]
    fn test_from_args_without_output() {
        let options =
            CliOptions::from_args(["seeds.toml", "snapshot.json"].map(String::from)).unwrap();
        assert!(options.output.is_none());
    }

    #[test]
    fn test_from_args_missing_arguments() {
        assert!(CliOptions::from_args(std::iter::empty::<String>()).is_err());
        assert!(CliOptions::from_args(["only-one".to_string()]).is_err());
    }

    #[test]
    fn test_from_args_rejects_unknown_flags_and_extras() {
        let err =
            CliOptions::from_args(["--frobnicate".to_string()]).unwrap_err();
        assert!(err.contains("--frobnicate"));

        let err = CliOptions::from_args(
            ["a", "b", "c", "d"].map(String::from),
        )
        .unwrap_err();
        assert!(err.contains("unexpected argument"));
    }

    fn row(value: serde_json::Value) -> Row {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("seeds.toml");
        let snapshot_path = dir.path().join("snapshot.json");
        let output_path = dir.path().join("seeds.rb");

        std::fs::write(
            &manifest_path,
            r#"
[[models]]
model = "User"
attributes = ["id", "name"]
"#,
        )
        .unwrap();

        let snapshot = Snapshot::new()
            .with_last_migration("20240101000000")
            .with_rows(
                "User",
                vec![
                    row(json!({"id": 2, "name": "Bo"})),
                    row(json!({"id": 1, "name": "Al"})),
                ],
            );
        snapshot.save_to_file(&snapshot_path).unwrap();

        let options = CliOptions {
            manifest: manifest_path,
            snapshot: snapshot_path,
            output: Some(output_path.clone()),
        };
        run(&options).unwrap();

        let seeds = std::fs::read_to_string(&output_path).unwrap();
        assert!(seeds.contains(r#"User.create({"id"=>1,"name"=>"Al"})"#));
        assert!(seeds.contains("SeedMigration::Migrator.bootstrap(20240101000000)"));
    }

    #[test]
    fn test_run_propagates_missing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("seeds.toml");
        std::fs::write(&manifest_path, "[[models]]\nmodel = \"User\"\nattributes = [\"id\"]\n")
            .unwrap();

        let options = CliOptions {
            manifest: manifest_path,
            snapshot: dir.path().join("missing.json"),
            output: None,
        };
        assert!(run(&options).is_err());
    }
}
