// advanced-circuits-config/src/parse.rs
// ============================================================================
// Module: Primitive Parsers
// Description: Strict coercion of document members into typed values.
// Purpose: Convert raw JSON members to typed fields with precise errors.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Primitive parsers convert raw document members into typed values, failing
//! precisely on malformed input. Coercion is strict: booleans must be JSON
//! boolean literals (no truthy strings), integers must be non-negative JSON
//! integers that fit in `u32`. Every failure names the offending field and
//! the raw value. No side effects.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;

use crate::config::ConfigError;

// ============================================================================
// SECTION: Parsers
// ============================================================================

/// Parses a strict JSON boolean member.
///
/// # Errors
///
/// Returns [`ConfigError::Format`] when the value is not a boolean literal.
pub fn parse_bool(field: &str, value: &Value) -> Result<bool, ConfigError> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        other => Err(ConfigError::Format(format!(
            "{field} must be a boolean literal, found {}",
            raw_text(other)
        ))),
    }
}

/// Parses a non-negative integer member that fits in `u32`.
///
/// # Errors
///
/// Returns [`ConfigError::Format`] when the value is not an integer in range.
pub fn parse_u32(field: &str, value: &Value) -> Result<u32, ConfigError> {
    let number = value.as_u64().ok_or_else(|| {
        ConfigError::Format(format!(
            "{field} must be a non-negative integer, found {}",
            raw_text(value)
        ))
    })?;
    u32::try_from(number).map_err(|_| {
        ConfigError::Format(format!("{field} exceeds the maximum of {}", u32::MAX))
    })
}

/// Parses a string member.
///
/// # Errors
///
/// Returns [`ConfigError::Format`] when the value is not a string.
pub fn parse_string(field: &str, value: &Value) -> Result<String, ConfigError> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        ConfigError::Format(format!("{field} must be a string, found {}", raw_text(value)))
    })
}

/// Parses an optional string member, treating `null` as absent.
///
/// # Errors
///
/// Returns [`ConfigError::Format`] when the value is neither a string nor null.
pub fn parse_optional_string(field: &str, value: &Value) -> Result<Option<String>, ConfigError> {
    match value {
        Value::Null => Ok(None),
        other => parse_string(field, other).map(Some),
    }
}

/// Returns a required member of a pre-validated node.
///
/// # Errors
///
/// Returns [`ConfigError::Format`] when the member is absent.
pub fn require_member<'a>(node: &'a Map<String, Value>, field: &str) -> Result<&'a Value, ConfigError> {
    node.get(field)
        .ok_or_else(|| ConfigError::Format(format!("required field {field} is missing")))
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Renders a JSON value compactly for error messages.
fn raw_text(value: &Value) -> String {
    value.to_string()
}
