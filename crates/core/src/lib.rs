//! # Seedsnap Core
//!
//! Core types, traits, and error handling for seedsnap.
//!
//! This crate provides the foundational building blocks used throughout
//! the seedsnap workspace, including:
//!
//! - **Types**: row representation, runtime environment, canonical value
//!   ordering
//! - **Traits**: `Validatable`, `Persistable`, and the writer's two
//!   collaborator seams `RowSource` and `MigrationLog`
//! - **Errors**: unified error handling with `SeedError` and `SeedResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ResultExt, SeedError, SeedResult};
pub use traits::{MigrationLog, Persistable, RowSource, Validatable};
pub use types::{AttributeSet, ENV_VAR, Environment, Row, compare_values};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
