//! Route templates and per-call route parameters.
//!
//! Responsibilities:
//! - Describe the fixed URL templates of a resource type per operation.
//! - Substitute `{name}` placeholders with percent-encoded identifiers.
//!
//! Does NOT handle:
//! - Resolving identifiers from explicit params or the chain (see `resources`).
//! - Joining the rendered path onto the API base URL (see `transport`).
//!
//! Invariants:
//! - A placeholder without a non-empty value is a `MissingParameter` error; nothing is
//!   rendered partially.
//! - Substituted values always occupy exactly one path segment.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ClientError, Result};
use crate::identifier::Identifier;
use crate::url_encoding::encode_path_segment;

/// Logical CRUD operation a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FindAll,
    Find,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Returns the method-style name used in error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::FindAll => "find_all",
            Operation::Find => "find",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A URL path template such as `ticket_fields/{fieldId}/options/{id}.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTemplate(&'static str);

impl RouteTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Placeholder names in order of appearance.
    fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.0;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }

    /// Substitute every placeholder from `params`.
    ///
    /// `operation` names the caller in the `MissingParameter` error raised
    /// when any placeholder has no value.
    pub fn render(&self, params: &RouteParameters, operation: &str) -> Result<String> {
        let missing: Vec<&str> = self
            .placeholders()
            .into_iter()
            .filter(|name| params.get(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ClientError::missing_parameter(operation, &missing));
        }

        let mut rendered = String::with_capacity(self.0.len() + 16);
        let mut rest = self.0;

        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                break;
            };
            rendered.push_str(&rest[..start]);
            if let Some(value) = params.get(&after[..end]) {
                rendered.push_str(&encode_path_segment(&value.to_string()));
            }
            rest = &after[end + 1..];
        }
        rendered.push_str(rest);

        Ok(rendered)
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The templates of one resource type, one per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTable {
    pub find_all: RouteTemplate,
    pub find: RouteTemplate,
    pub create: RouteTemplate,
    pub update: RouteTemplate,
    pub delete: RouteTemplate,
}

impl RouteTable {
    pub const fn get(&self, operation: Operation) -> RouteTemplate {
        match operation {
            Operation::FindAll => self.find_all,
            Operation::Find => self.find,
            Operation::Create => self.create,
            Operation::Update => self.update,
            Operation::Delete => self.delete,
        }
    }
}

/// Placeholder values for a single call. Built fresh per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParameters {
    values: BTreeMap<String, Identifier>,
}

impl RouteParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`RouteParameters::insert`].
    pub fn with(mut self, name: &str, value: impl Into<Identifier>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name`; empty identifiers are ignored so they render as missing.
    pub fn insert(&mut self, name: &str, value: impl Into<Identifier>) {
        let value = value.into();
        if !value.is_empty() {
            self.values.insert(name.to_string(), value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Identifier> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTION: RouteTemplate = RouteTemplate::new("ticket_fields/{fieldId}/options/{id}.json");

    #[test]
    fn test_placeholders() {
        assert_eq!(OPTION.placeholders(), vec!["fieldId", "id"]);
        assert!(RouteTemplate::new("ticket_fields.json").placeholders().is_empty());
    }

    #[test]
    fn test_render_all_placeholders() {
        let params = RouteParameters::new()
            .with("fieldId", 42u64)
            .with("id", 3u64);
        assert_eq!(
            OPTION.render(&params, "find").unwrap(),
            "ticket_fields/42/options/3.json"
        );
    }

    #[test]
    fn test_render_reports_every_missing_placeholder() {
        let err = OPTION.render(&RouteParameters::new(), "find").unwrap_err();
        match err {
            ClientError::MissingParameter { operation, params } => {
                assert_eq!(operation, "find");
                assert_eq!(params, vec!["fieldId".to_string(), "id".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_render_encodes_values() {
        let params = RouteParameters::new()
            .with("fieldId", "a/b")
            .with("id", "x y");
        assert_eq!(
            OPTION.render(&params, "find").unwrap(),
            "ticket_fields/a%2Fb/options/x%20y.json"
        );
    }

    #[test]
    fn test_empty_values_are_not_inserted() {
        let params = RouteParameters::new().with("fieldId", "").with("id", 0u64);
        assert!(params.is_empty());
    }

    #[test]
    fn test_extra_parameters_are_ignored() {
        let template = RouteTemplate::new("ticket_fields/{fieldId}/options.json");
        let params = RouteParameters::new()
            .with("fieldId", 42u64)
            .with("id", 3u64);
        assert_eq!(
            template.render(&params, "find_all").unwrap(),
            "ticket_fields/42/options.json"
        );
    }

    #[test]
    fn test_route_table_lookup() {
        let table = RouteTable {
            find_all: RouteTemplate::new("a.json"),
            find: RouteTemplate::new("a/{id}.json"),
            create: RouteTemplate::new("a.json"),
            update: RouteTemplate::new("a/{id}.json"),
            delete: RouteTemplate::new("a/{id}.json"),
        };
        assert_eq!(table.get(Operation::Find).as_str(), "a/{id}.json");
        assert_eq!(table.get(Operation::FindAll).as_str(), "a.json");
        assert_eq!(Operation::FindAll.to_string(), "find_all");
    }
}
