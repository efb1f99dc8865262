//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format record lists as tab-separated tables.
//! - Format single records as `key: value` lines.

use serde_json::Value;

use super::Column;
use super::common::format_json_value;

/// Tab-separated table with a header row; `label` names the items when empty.
pub fn format_table(records: &[Value], columns: &[Column], label: &str) -> String {
    if records.is_empty() {
        return format!("No {label} found.");
    }

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        columns
            .iter()
            .map(|column| column.header)
            .collect::<Vec<_>>()
            .join("\t"),
    );

    for record in records {
        lines.push(
            columns
                .iter()
                .map(|column| format_json_value(record.get(column.key)))
                .collect::<Vec<_>>()
                .join("\t"),
        );
    }

    lines.join("\n")
}

/// One `key: value` line per top-level attribute, in key order.
pub fn format_record(record: &Value) -> String {
    let Some(fields) = record.as_object() else {
        return format_json_value(Some(record));
    };

    let mut keys: Vec<&String> = fields.keys().collect();
    keys.sort();

    keys.into_iter()
        .map(|key| format!("{key}: {}", format_json_value(fields.get(key))))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_record_sorted_lines() {
        let record = json!({"name": "Low", "id": 1, "url": null});
        assert_eq!(format_record(&record), "id: 1\nname: Low\nurl: N/A");
    }

    #[test]
    fn test_format_table_header_only_when_records() {
        let columns = [Column::new("ID", "id")];
        assert_eq!(format_table(&[json!({"id": 7})], &columns, "items"), "ID\n7");
        assert_eq!(format_table(&[], &columns, "items"), "No items found.");
    }
}
