//! Error types for seedsnap
//!
//! This module provides unified error handling across the whole tool,
//! including registry validation errors, IO errors, serialization errors,
//! and configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for seedsnap
#[derive(Debug, Error)]
pub enum SeedError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A register entry is invalid
    #[error("Register entry validation failed for '{model}': {message}")]
    EntryValidation { model: String, message: String },

    // ========================================================================
    // Lookup Errors
    // ========================================================================
    /// A registered model has no rows in the snapshot
    #[error("Model not found in snapshot: {0}")]
    ModelNotFound(String),

    // ========================================================================
    // Generation Errors
    // ========================================================================
    /// Seed file generation failed
    #[error("Seed generation failed: {0}")]
    Generation(String),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Manifest could not be parsed
    #[error("Failed to parse manifest '{path}': {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Invalid snapshot file format
    #[error("Invalid snapshot format: {0}")]
    InvalidSnapshotFormat(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl SeedError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        SeedError::Validation(msg.into())
    }

    /// Create a register entry validation error
    pub fn entry_validation(model: impl Into<String>, msg: impl Into<String>) -> Self {
        SeedError::EntryValidation {
            model: model.into(),
            message: msg.into(),
        }
    }

    /// Create a generation error
    pub fn generation(msg: impl Into<String>) -> Self {
        SeedError::Generation(msg.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        SeedError::InvalidConfig(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        SeedError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        SeedError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SeedError::Validation(_) | SeedError::EntryValidation { .. }
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, SeedError::ModelNotFound(_))
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            SeedError::Io(_) | SeedError::FileRead { .. } | SeedError::FileWrite { .. }
        )
    }

    /// Check if this error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            SeedError::InvalidConfig(_)
                | SeedError::MissingConfig(_)
                | SeedError::ManifestParse { .. }
        )
    }
}

/// Result type alias using SeedError
pub type SeedResult<T> = Result<T, SeedError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> SeedResult<T>;
}

impl<T, E: Into<SeedError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> SeedResult<T> {
        self.map_err(|e| {
            let err: SeedError = e.into();
            SeedError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = SeedError::validation("Model name is required");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Validation error: Model name is required");
    }

    #[test]
    fn test_entry_validation_error() {
        let err = SeedError::entry_validation("User", "No attributes registered");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Register entry validation failed for 'User': No attributes registered"
        );
    }

    #[test]
    fn test_model_not_found_error() {
        let err = SeedError::ModelNotFound("Product".to_string());
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Model not found in snapshot: Product");
    }

    #[test]
    fn test_generation_error() {
        let err = SeedError::generation("stream closed");
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Seed generation failed: stream closed");
    }

    #[test]
    fn test_error_with_context() {
        let err = SeedError::with_context("Loading snapshot", "Permission denied");
        assert_eq!(err.to_string(), "Loading snapshot: Permission denied");
    }

    #[test]
    fn test_config_error_classification() {
        let err = SeedError::invalid_config("unknown environment 'staging'");
        assert!(err.is_config());
        assert!(!err.is_io());
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SeedError = io_err.into();
        assert!(err.is_io());
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.with_context("Opening seeds file").unwrap_err();
        assert!(err.to_string().starts_with("Opening seeds file:"));
    }
}
