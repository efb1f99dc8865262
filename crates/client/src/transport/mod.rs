//! Transport seam between resources and the network.
//!
//! Responsibilities:
//! - Define the [`ApiRequest`] a resource hands over for dispatch.
//! - Define the [`Transport`] trait so resources can be driven by any sender.
//! - Provide the default reqwest-backed [`HttpTransport`].
//!
//! Does NOT handle:
//! - Route template rendering (see `routes`).
//! - Retries, caching, or pagination; one request yields one response.

mod http;

use reqwest::Method;
use serde_json::{Map, Value};
use std::future::Future;

use crate::error::Result;
use crate::routes::RouteTemplate;

pub use http::HttpTransport;

/// A fully rendered request ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Unrendered template, used for logging and metric labels.
    pub route: RouteTemplate,
    /// Rendered path relative to the API base URL.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, route: RouteTemplate, path: String) -> Self {
        Self {
            method,
            route,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Sends an [`ApiRequest`] and returns the parsed JSON body.
///
/// `Ok(None)` means the server answered successfully with an empty body
/// (for example `204 No Content` on delete). Failures are returned as-is;
/// implementations do not retry.
pub trait Transport: Send + Sync {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<Option<Value>>> + Send;
}

/// Flatten caller parameters into query pairs.
///
/// Strings and numbers are used verbatim, arrays of scalars are joined with
/// commas (`ids=1,2,3`), nulls are dropped, and objects are sent as JSON.
pub fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| query_value(value).map(|v| (key.clone(), v)))
        .collect()
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_pairs_flattens_scalars_and_arrays() {
        let params = json!({
            "page": 2,
            "sort_by": "position",
            "ids": [1, 2, 3],
            "active": true,
            "skip": null
        });
        let mut pairs = query_pairs(params.as_object().unwrap());
        pairs.sort();

        assert_eq!(
            pairs,
            vec![
                ("active".to_string(), "true".to_string()),
                ("ids".to_string(), "1,2,3".to_string()),
                ("page".to_string(), "2".to_string()),
                ("sort_by".to_string(), "position".to_string()),
            ]
        );
    }

    #[test]
    fn test_api_request_builder() {
        let route = RouteTemplate::new("ticket_fields.json");
        let request = ApiRequest::new(Method::POST, route, "ticket_fields.json".to_string())
            .with_body(json!({"ticket_field": {"title": "Priority"}}));

        assert_eq!(request.method, Method::POST);
        assert!(request.query.is_empty());
        assert_eq!(request.body.unwrap()["ticket_field"]["title"], "Priority");
    }
}
