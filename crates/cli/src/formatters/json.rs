//! JSON formatter implementation.

use anyhow::{Context, Result};
use serde_json::Value;

/// Pretty-print a response; an empty body renders as `null`.
pub fn format_json(response: Option<&Value>) -> Result<String> {
    serde_json::to_string_pretty(response.unwrap_or(&Value::Null))
        .context("Failed to serialize response as JSON")
}
