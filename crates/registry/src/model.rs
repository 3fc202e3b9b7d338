//! Model descriptors
//!
//! A `ModelDescriptor` names one ActiveRecord model to be snapshotted:
//! the model constant, its storage table, and its primary-key attribute.

use heck::ToSnakeCase;
use seedsnap_core::{SeedError, SeedResult, Validatable};
use serde::{Deserialize, Serialize};

// ============================================================================
// ModelDescriptor
// ============================================================================

/// Describes one model whose rows are emitted into the seed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model constant name (PascalCase, e.g., "User", "BlogPost")
    pub name: String,

    /// Database table name (snake_case plural, e.g., "users", "blog_posts")
    pub table_name: String,

    /// Primary-key attribute name
    pub primary_key: String,
}

/// Default primary-key attribute, matching ActiveRecord's convention.
pub const DEFAULT_PRIMARY_KEY: &str = "id";

impl ModelDescriptor {
    /// Create a descriptor with the table name derived from the model name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let table_name = to_snake_case_plural(&name);

        Self {
            name,
            table_name,
            primary_key: DEFAULT_PRIMARY_KEY.to_string(),
        }
    }

    /// Override the derived table name
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Override the primary-key attribute name
    pub fn with_primary_key(mut self, primary_key: impl Into<String>) -> Self {
        self.primary_key = primary_key.into();
        self
    }
}

impl Validatable for ModelDescriptor {
    fn validate(&self) -> SeedResult<()> {
        if self.name.is_empty() {
            return Err(SeedError::validation("Model name cannot be empty"));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(SeedError::entry_validation(
                &self.name,
                "Model name cannot contain whitespace",
            ));
        }
        if self.table_name.is_empty() {
            return Err(SeedError::entry_validation(
                &self.name,
                "Table name cannot be empty",
            ));
        }
        if self.primary_key.is_empty() {
            return Err(SeedError::entry_validation(
                &self.name,
                "Primary key cannot be empty",
            ));
        }
        Ok(())
    }
}

/// Convert a PascalCase model name to its snake_case plural table name
fn to_snake_case_plural(s: &str) -> String {
    let snake = s.to_snake_case();

    // Simple pluralization rules
    if snake.ends_with('s')
        || snake.ends_with('x')
        || snake.ends_with("ch")
        || snake.ends_with("sh")
    {
        format!("{}es", snake)
    } else if snake.ends_with('y')
        && !snake.ends_with("ey")
        && !snake.ends_with("ay")
        && !snake.ends_with("oy")
    {
        format!("{}ies", &snake[..snake.len() - 1])
    } else {
        format!("{}s", snake)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_derivation() {
        assert_eq!(ModelDescriptor::new("User").table_name, "users");
        assert_eq!(ModelDescriptor::new("BlogPost").table_name, "blog_posts");
        assert_eq!(ModelDescriptor::new("Category").table_name, "categories");
        assert_eq!(ModelDescriptor::new("Address").table_name, "addresses");
        assert_eq!(ModelDescriptor::new("Box").table_name, "boxes");
        assert_eq!(ModelDescriptor::new("Journey").table_name, "journeys");
    }

    #[test]
    fn test_default_primary_key() {
        assert_eq!(ModelDescriptor::new("User").primary_key, "id");
    }

    #[test]
    fn test_overrides() {
        let model = ModelDescriptor::new("Person")
            .with_table_name("people")
            .with_primary_key("person_id");
        assert_eq!(model.table_name, "people");
        assert_eq!(model.primary_key, "person_id");
    }

    #[test]
    fn test_validation() {
        assert!(ModelDescriptor::new("User").is_valid());
        assert!(!ModelDescriptor::new("").is_valid());
        assert!(!ModelDescriptor::new("Bad Name").is_valid());
        assert!(
            !ModelDescriptor::new("User")
                .with_primary_key("")
                .is_valid()
        );
    }
}
