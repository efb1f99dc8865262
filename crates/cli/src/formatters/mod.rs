//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide JSON and table output for raw API responses.
//! - Pick records out of the platform's `{ "<object_name>": ... }` envelopes.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - JSON output is the response exactly as returned, pretty-printed.
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - Missing or null values render as `N/A` in tables.
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior |
//! |--------|---------------------|
//! | JSON | `null` for an empty body, otherwise the body as-is |
//! | Table | `No <items> found.` |

use anyhow::Result;
use serde_json::{Value, json};

mod common;
mod json;
mod table;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// One table column: header text and the record key it shows.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub key: &'static str,
}

impl Column {
    pub const fn new(header: &'static str, key: &'static str) -> Self {
        Self { header, key }
    }
}

/// Format a list response whose records live under `plural`.
pub fn format_list(
    format: OutputFormat,
    response: Option<&Value>,
    plural: &str,
    columns: &[Column],
) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(response),
        OutputFormat::Table => {
            let records = response
                .and_then(|body| body.get(plural))
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            Ok(table::format_table(records, columns, &plural.replace('_', " ")))
        }
    }
}

/// Format a single-record response whose record lives under `object_name`.
pub fn format_record(format: OutputFormat, response: Option<&Value>, object_name: &str) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(response),
        OutputFormat::Table => {
            let Some(body) = response else {
                return Ok("No content returned.".to_string());
            };
            let record = body.get(object_name).unwrap_or(body);
            Ok(table::format_record(record))
        }
    }
}

/// Format the outcome of a delete; most deletes answer with an empty body.
pub fn format_deleted(
    format: OutputFormat,
    response: Option<&Value>,
    label: &str,
    id: &str,
) -> Result<String> {
    match (format, response) {
        (OutputFormat::Json, Some(body)) => json::format_json(Some(body)),
        (OutputFormat::Json, None) => json::format_json(Some(&json!({"deleted": true, "id": id}))),
        (OutputFormat::Table, _) => Ok(format!("Deleted {label} {id}.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[Column] = &[Column::new("ID", "id"), Column::new("Name", "name")];

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_format_list_table() {
        let body = json!({"custom_field_options": [{"id": 1, "name": "Low"}, {"id": 2}]});
        let output = format_list(OutputFormat::Table, Some(&body), "custom_field_options", COLUMNS).unwrap();
        assert_eq!(output, "ID\tName\n1\tLow\n2\tN/A");
    }

    #[test]
    fn test_format_list_table_empty() {
        let output = format_list(OutputFormat::Table, None, "custom_field_options", COLUMNS).unwrap();
        assert_eq!(output, "No custom field options found.");
    }

    #[test]
    fn test_format_record_json_is_unmodified() {
        let body = json!({"custom_field_option": {"id": 1, "name": "Low"}});
        let output = format_record(OutputFormat::Json, Some(&body), "custom_field_option").unwrap();
        assert_eq!(serde_json::from_str::<Value>(&output).unwrap(), body);
    }

    #[test]
    fn test_format_deleted() {
        assert_eq!(
            format_deleted(OutputFormat::Table, None, "custom field option", "3").unwrap(),
            "Deleted custom field option 3."
        );
        let json_output = format_deleted(OutputFormat::Json, None, "custom field option", "3").unwrap();
        assert_eq!(
            serde_json::from_str::<Value>(&json_output).unwrap(),
            json!({"deleted": true, "id": "3"})
        );
    }
}
