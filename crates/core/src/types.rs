//! Core types used throughout seedsnap
//!
//! This module contains the fundamental types shared by the registry,
//! the snapshot, and the seed file writer: the row representation, the
//! runtime environment, and the canonical value ordering used for
//! deterministic output.

use crate::error::SeedError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Rows and Attributes
// ============================================================================

/// One persisted record's attribute mapping: string keys, dynamically-typed
/// values. Read-only and transient — a row is not retained after its
/// creation statement has been written.
pub type Row = serde_json::Map<String, Value>;

/// The set of attribute names a register entry allows into the seed file.
/// Stored sorted so iteration order is stable.
pub type AttributeSet = BTreeSet<String>;

// ============================================================================
// Environment
// ============================================================================

/// Environment variable consulted by [`Environment::from_env`].
pub const ENV_VAR: &str = "SEEDSNAP_ENV";

/// The runtime environment the tool believes it is operating in.
///
/// Seed file generation is restricted to development-like contexts; the
/// writer's precondition gate checks [`Environment::is_development`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development — seed generation permitted
    #[default]
    Development,
    /// Test runs
    Test,
    /// Production deployments — seed generation never permitted
    Production,
}

impl Environment {
    /// Resolve the environment from `SEEDSNAP_ENV`.
    ///
    /// An unset variable resolves to [`Environment::Development`]; an
    /// unrecognized value is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self, SeedError> {
        match std::env::var(ENV_VAR) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Environment::Development),
        }
    }

    /// Whether this is a development-like environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl FromStr for Environment {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(SeedError::invalid_config(format!(
                "unknown environment '{other}' (expected development, test, or production)"
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        };
        write!(f, "{name}")
    }
}

// ============================================================================
// Canonical value ordering
// ============================================================================

/// Total order over JSON values, used to sort rows by primary key.
///
/// Numbers compare numerically and strings lexicographically, matching the
/// "as stored" ordering a primary-key scan would produce. Values of
/// different kinds are ranked null < bool < number < string < array <
/// object so that mixed-type columns still order deterministically.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => {
            for (xv, yv) in x.iter().zip(y.iter()) {
                let ord = compare_values(xv, yv);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        _ => value_rank(a).cmp(&value_rank(b)),
    }
}

fn value_rank(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_environment_parse() {
        assert_eq!(
            "development".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("TEST".parse::<Environment>().unwrap(), Environment::Test);
        assert_eq!(
            "prod".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_is_development() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Test.is_development());
        assert!(!Environment::Production.is_development());
    }

    #[test]
    fn test_environment_display_round_trip() {
        for env in [
            Environment::Development,
            Environment::Test,
            Environment::Production,
        ] {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn test_environment_default() {
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[test]
    fn test_compare_numbers() {
        assert_eq!(compare_values(&json!(1), &json!(2)), Ordering::Less);
        assert_eq!(compare_values(&json!(10), &json!(2)), Ordering::Greater);
        assert_eq!(compare_values(&json!(1.5), &json!(1.5)), Ordering::Equal);
    }

    #[test]
    fn test_compare_strings_lexicographic() {
        assert_eq!(
            compare_values(&json!("abc"), &json!("abd")),
            Ordering::Less
        );
        // Lexicographic, not numeric: "10" sorts before "2"
        assert_eq!(compare_values(&json!("10"), &json!("2")), Ordering::Less);
    }

    #[test]
    fn test_compare_mixed_kinds_by_rank() {
        assert_eq!(compare_values(&json!(null), &json!(1)), Ordering::Less);
        assert_eq!(compare_values(&json!(1), &json!("1")), Ordering::Less);
        assert_eq!(compare_values(&json!(true), &json!(0)), Ordering::Less);
    }

    #[test]
    fn test_compare_arrays_elementwise() {
        assert_eq!(
            compare_values(&json!([1, 2]), &json!([1, 3])),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&json!([1, 2]), &json!([1, 2, 0])),
            Ordering::Less
        );
    }
}
