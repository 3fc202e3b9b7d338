//! Canonical attribute encoding
//!
//! Serializes a row's attribute mapping to the `{"key"=>value,...}` form
//! emitted inside creation statements. Keys are always sorted ascending
//! lexicographically so regenerated seed files diff cleanly.

use seedsnap_core::{AttributeSet, Row, compare_values};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;

// ============================================================================
// Attribute encoding
// ============================================================================

/// Encode a row's attributes to canonical hash-literal form.
///
/// The row is restricted to the `allowed` attribute set, `skip` (the
/// primary key, when IDs are ignored) is removed, and the remaining keys
/// are emitted in ascending lexicographic order.
pub fn encode_attributes(row: &Row, allowed: &AttributeSet, skip: Option<&str>) -> String {
    let selected: BTreeMap<&str, &Value> = row
        .iter()
        .filter(|(key, _)| allowed.contains(key.as_str()))
        .filter(|(key, _)| Some(key.as_str()) != skip)
        .map(|(key, value)| (key.as_str(), value))
        .collect();

    let pairs: Vec<String> = selected
        .iter()
        .map(|(key, value)| format!("{}=>{}", encode_string(key), encode_value(value)))
        .collect();

    format!("{{{}}}", pairs.join(","))
}

/// Encode a single attribute value.
///
/// JSON literals, with one Ruby-ism: null renders as `nil` so the output
/// is executable as-is. Nested arrays and hashes encode recursively with
/// sorted keys.
pub fn encode_value(value: &Value) -> String {
    match value {
        Value::Null => "nil".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => encode_string(s),
        Value::Array(items) => {
            let encoded: Vec<String> = items.iter().map(encode_value).collect();
            format!("[{}]", encoded.join(","))
        }
        Value::Object(map) => {
            let sorted: BTreeMap<&String, &Value> = map.iter().collect();
            let pairs: Vec<String> = sorted
                .iter()
                .map(|(key, value)| format!("{}=>{}", encode_string(key), encode_value(value)))
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
    }
}

/// Double-quote and escape a string
fn encode_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

// ============================================================================
// Row ordering
// ============================================================================

/// Compare two rows by their primary-key value. Rows missing the key sort
/// first, as a null key would.
pub fn compare_rows(primary_key: &str, a: &Row, b: &Row) -> Ordering {
    static NULL: Value = Value::Null;
    let a_key = a.get(primary_key).unwrap_or(&NULL);
    let b_key = b.get(primary_key).unwrap_or(&NULL);
    compare_values(a_key, b_key)
}

// ============================================================================
// Tests
// ============================================================================
