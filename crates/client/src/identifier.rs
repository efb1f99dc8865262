//! Scalar resource identifiers.
//!
//! Helpdesk records are addressed by numeric ids, but route parameters and
//! caller-supplied maps may carry them as strings. `Identifier` keeps the
//! original shape so it serializes back the way it was given.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A resource identifier used in routes and chained calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(u64),
    Text(String),
}

impl Identifier {
    /// An identifier is empty when it is a blank string or the number zero.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0,
            Self::Text(s) => s.trim().is_empty(),
        }
    }

    /// Convert a JSON scalar into an identifier.
    ///
    /// Returns `None` for null, booleans, negative or fractional numbers,
    /// arrays, and objects.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_u64().map(Self::Number),
            Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    /// Like [`Identifier::from_value`], discarding empty identifiers.
    pub fn non_empty_from_value(value: &Value) -> Option<Self> {
        Self::from_value(value).filter(|id| !id.is_empty())
    }

    /// JSON representation, preserving numeric vs textual form.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Number(n) => Value::from(*n),
            Self::Text(s) => Value::from(s.as_str()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Identifier {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for Identifier {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}
