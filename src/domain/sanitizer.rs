//! Input sanitizer guarding against query-operator injection.
//!
//! The check is a narrow denylist: a value passes only when it is a string
//! free of every substring in [`FORBIDDEN_SUBSTRINGS`]. Nested structures are
//! never inspected; any non-string value is rejected outright. It is not a
//! complete injection defence.

use serde_json::Value;

use crate::config::FORBIDDEN_SUBSTRINGS;

/// Check whether a candidate value is safe to store as a literal.
///
/// Returns `false` for mappings such as `{"$gt": ""}`, arrays, numbers,
/// booleans and null, and for strings containing `$` or `>`.
pub fn is_valid_input(value: &Value) -> bool {
    match value {
        Value::String(s) => is_valid_str(s),
        _ => false,
    }
}

/// String form of [`is_valid_input`].
pub fn is_valid_str(value: &str) -> bool {
    !FORBIDDEN_SUBSTRINGS
        .iter()
        .any(|forbidden| value.contains(forbidden))
}
