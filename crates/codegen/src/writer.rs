//! # Seed File Writer
//!
//! Produces one text artifact representing the entire current database
//! state for the registered models. The pipeline mirrors the file layout:
//!
//! ```text
//! Registry + RowSource + MigrationLog
//!         │
//!         ▼
//!   header comment block
//!   connected_to(database: …) do     (only with a target database)
//!     ActiveRecord::Base.transaction do
//!       Model.create({...})          (one per row, primary-key order)
//!       reset_pk_sequence!('…')      (unless IDs are ignored)
//!     end
//!   end
//!   SeedMigration::Migrator.bootstrap(<last migration>)
//! ```
//!
//! Generation is gated: it only runs when updates are enabled and the
//! environment is development-like. A blocked gate is a no-op, not an
//! error — no file is created or truncated.

use crate::WriterConfig;
use crate::encode::{compare_rows, encode_attributes};
use crate::stream::SeedStream;
use seedsnap_core::{MigrationLog, Row, RowSource, SeedError, SeedResult};
use seedsnap_registry::{RegisterEntry, Registry};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

// ============================================================================
// File header
// ============================================================================

/// Fixed explanatory header. The exact text matters: downstream tooling
/// diffs generated seed files against gem-generated ones.
const FILE_HEADER: &str = "\
# encoding: UTF-8
# This file is auto-generated from the current content of the database. Instead
# of editing this file, please use the migrations feature of Seed Migration to
# incrementally modify your database, and then regenerate this seed file.
#
# If you need to create the database on another system, you should be using
# db:seed, not running all the migrations from scratch. The latter is a flawed
# and unsustainable approach (the more migrations you'll amass, the slower
# it'll run and the greater likelihood for issues).
#
# It's strongly recommended to check this file into your version control system.

";

// ============================================================================
// SeedReport
// ============================================================================

/// Summary of one completed generation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    /// Number of registered models emitted
    pub models: usize,
    /// Number of record-creation statements emitted
    pub statements: usize,
}

// ============================================================================
// SeedWriter
// ============================================================================

/// The seed file writer.
///
/// Stateless aside from its configuration; one call to
/// [`create`](SeedWriter::create) or [`render`](SeedWriter::render) is one
/// generation pass.
#[derive(Debug, Clone, Default)]
pub struct SeedWriter {
    config: WriterConfig,
}

impl SeedWriter {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Create a writer with the given configuration
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Create a writer with default configuration
    pub fn with_defaults() -> Self {
        Self::new(WriterConfig::default())
    }

    /// Get the current configuration
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    // ====================================================================
    // Generation
    // ====================================================================

    /// Render the seed script to a string.
    ///
    /// Returns `Ok(None)` when the precondition gate blocks generation.
    pub fn render(
        &self,
        registry: &Registry,
        source: &dyn RowSource,
        log: &dyn MigrationLog,
    ) -> SeedResult<Option<String>> {
        if !self.permitted() {
            return Ok(None);
        }

        let mut buf: Vec<u8> = Vec::new();
        let mut stream = SeedStream::new(&mut buf);
        self.write_all(&mut stream, registry, source, log)?;
        stream.finish()?;

        let content = String::from_utf8(buf)
            .map_err(|e| SeedError::internal(format!("seed script was not UTF-8: {e}")))?;
        Ok(Some(content))
    }

    /// Generate the seed file at `path`, overwriting any existing file.
    ///
    /// The file is created only after the precondition gate passes; a
    /// blocked gate returns `Ok(None)` and touches nothing. Write errors
    /// propagate unhandled and may leave a truncated file behind.
    pub fn create(
        &self,
        path: &Path,
        registry: &Registry,
        source: &dyn RowSource,
        log: &dyn MigrationLog,
    ) -> SeedResult<Option<SeedReport>> {
        if !self.permitted() {
            return Ok(None);
        }

        let file = File::create(path).map_err(|e| SeedError::FileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut stream = SeedStream::new(BufWriter::new(file));
        let report = self.write_all(&mut stream, registry, source, log)?;
        stream.finish()?;

        tracing::info!(
            path = %path.display(),
            models = report.models,
            statements = report.statements,
            "seed file written",
        );
        Ok(Some(report))
    }

    /// Like [`create`](SeedWriter::create), returning the written path
    pub fn create_at(
        &self,
        path: impl Into<PathBuf>,
        registry: &Registry,
        source: &dyn RowSource,
        log: &dyn MigrationLog,
    ) -> SeedResult<Option<PathBuf>> {
        let path = path.into();
        Ok(self
            .create(&path, registry, source, log)?
            .map(|_| path))
    }

    // ====================================================================
    // Internals
    // ====================================================================

    fn permitted(&self) -> bool {
        if self.config.permits_generation() {
            return true;
        }
        tracing::debug!(
            update_enabled = self.config.update_enabled,
            environment = %self.config.environment,
            "seed generation skipped",
        );
        false
    }

    fn write_all<W: Write>(
        &self,
        stream: &mut SeedStream<W>,
        registry: &Registry,
        source: &dyn RowSource,
        log: &dyn MigrationLog,
    ) -> SeedResult<SeedReport> {
        self.write_prefix(stream)?;

        let mut statements = 0;
        for entry in registry.entries() {
            statements += self.write_register_entry(stream, entry, source)?;
        }

        self.write_postfix(stream, log)?;

        Ok(SeedReport {
            models: registry.len(),
            statements,
        })
    }

    fn write_prefix<W: Write>(&self, stream: &mut SeedStream<W>) -> SeedResult<()> {
        stream.write_raw(FILE_HEADER)?;

        if let Some(database) = &self.config.target_database {
            stream.write_line(&format!(
                "ActiveRecord::Base.connected_to(database: {database}) do"
            ))?;
            stream.increase_indent();
        }

        stream.write_line("ActiveRecord::Base.transaction do")?;
        stream.increase_indent();
        Ok(())
    }

    fn write_register_entry<W: Write>(
        &self,
        stream: &mut SeedStream<W>,
        entry: &RegisterEntry,
        source: &dyn RowSource,
    ) -> SeedResult<usize> {
        let mut rows = source.rows_for(&entry.model.name)?;
        rows.sort_by(|a, b| compare_rows(&entry.model.primary_key, a, b));

        for row in &rows {
            stream.write_line(&self.creation_statement(entry, row))?;
        }

        if !self.config.ignore_ids {
            stream.write_line(&format!(
                "ActiveRecord::Base.connection.reset_pk_sequence!('{}')",
                entry.model.table_name
            ))?;
        }

        Ok(rows.len())
    }

    fn write_postfix<W: Write>(
        &self,
        stream: &mut SeedStream<W>,
        log: &dyn MigrationLog,
    ) -> SeedResult<()> {
        stream.decrease_indent();
        stream.write_line("end")?;

        if self.config.target_database.is_some() {
            stream.decrease_indent();
            stream.write_line("end")?;
        }

        // None interpolates to empty parentheses, as a nil version would
        let version = log.last_version().unwrap_or_default();
        stream.write_line(&format!("SeedMigration::Migrator.bootstrap({version})"))?;
        Ok(())
    }

    fn creation_statement(&self, entry: &RegisterEntry, row: &Row) -> String {
        let skip = self
            .config
            .ignore_ids
            .then(|| entry.model.primary_key.as_str());
        format!(
            "{}.{}({})",
            entry.model.name,
            self.config.create_method(),
            encode_attributes(row, &entry.attributes, skip),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
