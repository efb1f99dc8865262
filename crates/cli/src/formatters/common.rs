//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Standardized missing/null value handling.
//! - Rendering JSON scalars as plain cell text.

use serde_json::Value;

/// String representation for missing, null, or empty values.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Render a JSON value for a table cell.
///
/// Strings are shown without quotes; nested values fall back to compact JSON.
pub fn format_json_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => DEFAULT_MISSING_VALUE.to_string(),
        Some(Value::String(s)) if s.is_empty() => DEFAULT_MISSING_VALUE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_json_value() {
        assert_eq!(format_json_value(None), "N/A");
        assert_eq!(format_json_value(Some(&Value::Null)), "N/A");
        assert_eq!(format_json_value(Some(&json!(""))), "N/A");
        assert_eq!(format_json_value(Some(&json!("Low"))), "Low");
        assert_eq!(format_json_value(Some(&json!(3))), "3");
        assert_eq!(format_json_value(Some(&json!(true))), "true");
        assert_eq!(format_json_value(Some(&json!([1, 2]))), "[1,2]");
    }
}
