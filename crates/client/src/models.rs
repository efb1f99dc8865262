//! Typed views of helpdesk API payloads.
//!
//! Resource operations return the raw JSON response unchanged; these types
//! are an optional, lenient way to read it. Unknown fields are ignored and
//! most fields are optional because the API omits them freely.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// A selectable value of a drop-down or multi-select ticket field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldOption {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub raw_name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub url: Option<String>,
}

/// Envelope of a single option response.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomFieldOptionResponse {
    pub custom_field_option: CustomFieldOption,
}

/// Envelope of an option list response.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomFieldOptionListResponse {
    #[serde(default)]
    pub custom_field_options: Vec<CustomFieldOption>,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub previous_page: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// A ticket field definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketField {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub field_type: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub position: Option<i64>,
    #[serde(default)]
    pub custom_field_options: Vec<CustomFieldOption>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Envelope of a single ticket field response.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketFieldResponse {
    pub ticket_field: TicketField,
}

/// Envelope of a ticket field list response.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketFieldListResponse {
    #[serde(default)]
    pub ticket_fields: Vec<TicketField>,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Deserialize a raw response into one of the typed envelopes.
///
/// An absent body (`None`) is reported as `ClientError::InvalidResponse`.
pub fn parse_response<T: DeserializeOwned>(response: Option<Value>) -> Result<T> {
    let value = response
        .ok_or_else(|| ClientError::InvalidResponse("Response body was empty".to_string()))?;
    serde_json::from_value(value)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse response: {e}")))
}
