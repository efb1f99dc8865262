//! Command implementations.
//!
//! Responsibilities:
//! - Host one module per top-level subcommand.
//! - Parse shared argument shapes (`key=value` assignments, identifiers).
//!
//! Does NOT handle:
//! - Output rendering (see `formatters`).

pub mod fields;
pub mod options;

use anyhow::{Result, bail};
use helpdesk_client::{Identifier, Params};
use serde_json::Value;

/// Parse `key=value` assignments into call params.
///
/// Values that parse as JSON (`5`, `true`, `null`, `"x"`, `[1,2]`) keep their
/// JSON type; anything else is taken as a plain string.
pub fn parse_assignments(assignments: &[String]) -> Result<Params> {
    let mut params = Params::new();
    for assignment in assignments {
        let Some((key, raw)) = assignment.split_once('=') else {
            bail!("Invalid field '{assignment}': expected key=value");
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("Invalid field '{assignment}': key must not be empty");
        }
        let value =
            serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        params.insert(key.to_string(), value);
    }
    Ok(params)
}

/// Numeric ids stay numeric; anything else is sent as text.
pub fn parse_identifier(raw: &str) -> Identifier {
    raw.trim()
        .parse::<u64>()
        .map(Identifier::Number)
        .unwrap_or_else(|_| Identifier::Text(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_assignments_keeps_json_types() {
        let params = parse_assignments(&[
            "name=Urgent".to_string(),
            "position=3".to_string(),
            "default=false".to_string(),
            "raw_name={{dc.urgent}}".to_string(),
            "value=a=b".to_string(),
        ])
        .unwrap();

        assert_eq!(
            Value::Object(params),
            json!({
                "name": "Urgent",
                "position": 3,
                "default": false,
                "raw_name": "{{dc.urgent}}",
                "value": "a=b"
            })
        );
    }

    #[test]
    fn test_parse_assignments_rejects_missing_separator() {
        let err = parse_assignments(&["name".to_string()]).unwrap_err();
        assert!(err.to_string().contains("expected key=value"));

        let err = parse_assignments(&["=x".to_string()]).unwrap_err();
        assert!(err.to_string().contains("key must not be empty"));
    }

    #[test]
    fn test_parse_identifier() {
        assert_eq!(parse_identifier("42"), Identifier::Number(42));
        assert_eq!(parse_identifier("priority"), Identifier::Text("priority".to_string()));
    }
}
