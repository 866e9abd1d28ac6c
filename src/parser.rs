//! JSON parsing into the crate's value representation.
//!
//! This module is the validation boundary in front of the diff engine:
//! malformed input is rejected here with a readable error and never reaches
//! the comparison code. Object key order is preserved during parsing so that
//! diff traversal order matches the source documents.
//!
//! # Examples
//!
//! ```no_run
//! use jdiff::parser::parse_file;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let value = parse_file(Path::new("data.json"))?;
//! # Ok(())
//! # }
//! ```

use crate::error::ParseError;
use crate::value::Value;
use std::fs;
use std::path::Path;

/// Parses a JSON file into a [`Value`].
///
/// # Arguments
///
/// * `path` - Path to the file to parse
///
/// # Errors
///
/// This function will return an error if:
/// - The file does not exist (`ParseError::FileNotFound`)
/// - The file cannot be read (`ParseError::ReadError`)
/// - The file contains invalid JSON (`ParseError::JsonError`)
///
/// # Examples
///
/// ```no_run
/// use jdiff::parser::parse_file;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let value = parse_file(Path::new("config.json"))?;
/// println!("parsed {}", value.type_name());
/// # Ok(())
/// # }
/// ```
pub fn parse_file(path: &Path) -> Result<Value, ParseError> {
    if !path.exists() {
        return Err(ParseError::file_not_found(
            path.to_string_lossy().to_string(),
        ));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy().to_string(), e))?;

    parse_str(&content).map_err(|e| ParseError::json_error(path.to_string_lossy().to_string(), e))
}

/// Parses a JSON string into a [`Value`].
///
/// # Examples
///
/// ```
/// use jdiff::parser::parse_str;
///
/// let value = parse_str(r#"{"name": "Alice", "age": 30}"#).unwrap();
/// assert_eq!(value.type_name(), "object");
/// ```
pub fn parse_str(content: &str) -> Result<Value, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(json_to_value(value))
}

/// Converts a `serde_json::Value` into the crate's [`Value`].
///
/// serde_json is built with `preserve_order`, so object entries arrive in
/// document order and stay in that order.
fn json_to_value(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                Value::Number(f)
            } else {
                // Only reachable for numbers outside f64 range
                Value::Number(0.0)
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(json_to_value).collect()),
        serde_json::Value::Object(obj) => Value::Object(
            obj.into_iter()
                .map(|(key, value)| (key, json_to_value(value)))
                .collect(),
        ),
    }
}
