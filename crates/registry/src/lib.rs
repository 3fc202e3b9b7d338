//! # Seedsnap Registry
//!
//! Model registry and database snapshot for seedsnap.
//!
//! This crate defines what gets seeded: which models, which of their
//! attributes, and the captured row data the seed file writer serializes.
//!
//! - [`ModelDescriptor`] — one model: constant name, table name, primary key
//! - [`RegisterEntry`] — a model plus its allowed attribute set
//! - [`Registry`] — the ordered list of entries; registration order is
//!   emission order
//! - [`Snapshot`] — captured rows per model, implementing the writer's
//!   `RowSource` and `MigrationLog` collaborators
//!

pub mod entry;
pub mod model;
pub mod registry;
pub mod snapshot;

// Re-export commonly used items at crate root
pub use entry::RegisterEntry;
pub use model::{DEFAULT_PRIMARY_KEY, ModelDescriptor};
pub use registry::Registry;
pub use snapshot::Snapshot;
