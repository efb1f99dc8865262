//! reqwest-backed transport.
//!
//! Responsibilities:
//! - Join rendered paths onto the API base URL and attach credentials.
//! - Send JSON bodies and parse JSON responses.
//! - Turn non-success statuses into `ClientError::ApiError` with a readable message.
//! - Record request metrics when a collector is configured.
//!
//! Does NOT handle:
//! - Retries or rate-limit backoff; every call is a single attempt.

use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

use super::{ApiRequest, Transport};
use crate::auth::{AuthStrategy, authorize};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Default transport: one HTTPS request per call via `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    auth: AuthStrategy,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl HttpTransport {
    /// Create a transport; `base_url` must not end with a slash.
    pub fn new(
        http: reqwest::Client,
        base_url: String,
        auth: AuthStrategy,
        timeout: Duration,
        metrics: Option<MetricsCollector>,
    ) -> Self {
        Self {
            http,
            base_url,
            auth,
            timeout,
            metrics,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_strategy(&self) -> &AuthStrategy {
        &self.auth
    }

    /// Absolute URL for a rendered path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn map_send_error(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout(self.timeout)
        } else {
            ClientError::from(error)
        }
    }

    async fn execute(&self, request: &ApiRequest) -> Result<(u16, Option<Value>)> {
        let url = self.url_for(&request.path);

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .header(ACCEPT, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let builder = authorize(builder, &self.auth);

        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let final_url = response.url().to_string();
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            return Err(ClientError::ApiError {
                status: status.as_u16(),
                url: final_url,
                message: api_error_message(&text, status.as_u16()),
            });
        }

        if text.trim().is_empty() {
            return Ok((status.as_u16(), None));
        }

        let value = serde_json::from_str(&text).map_err(|e| {
            ClientError::InvalidResponse(format!(
                "Failed to parse response from {}: {}",
                request.route, e
            ))
        })?;
        Ok((status.as_u16(), Some(value)))
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>> {
        let route = request.route.as_str();
        let method = request.method.as_str().to_string();

        debug!(
            method = %method,
            route = route,
            path = %request.path,
            "Sending helpdesk API request"
        );

        if let Some(metrics) = &self.metrics {
            metrics.record_request(route, &method);
        }

        let started = Instant::now();
        let result = self.execute(&request).await;
        let elapsed = started.elapsed();

        match &result {
            Ok((status, _)) => {
                debug!(status = *status, elapsed_ms = elapsed.as_millis() as u64, "Request completed");
                if let Some(metrics) = &self.metrics {
                    metrics.record_request_duration(route, &method, elapsed, Some(*status));
                }
            }
            Err(e) => {
                debug!(error = %e, "Request failed");
                if let Some(metrics) = &self.metrics {
                    metrics.record_request_duration(route, &method, elapsed, e.status());
                    metrics.record_client_error(route, &method, e);
                }
            }
        }

        result.map(|(_, body)| body)
    }
}

/// Build a readable message from an error response body.
///
/// Understands the platform's error shapes:
/// - `{"error": "RecordNotFound", "description": "Not found"}`
/// - `{"error": {"title": "Forbidden", "message": "..."}}`
/// - `details` maps of per-field validation messages
///
/// Falls back to the raw body, or the status when the body is empty.
pub(crate) fn api_error_message(body: &str, status: u16) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!("HTTP {status}");
    }

    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) else {
        return trimmed.to_string();
    };

    let mut parts: Vec<String> = Vec::new();
    match map.get("error") {
        Some(Value::String(code)) => parts.push(code.clone()),
        Some(Value::Object(err)) => {
            if let Some(title) = err.get("title").and_then(Value::as_str) {
                parts.push(title.to_string());
            }
            if let Some(message) = err.get("message").and_then(Value::as_str) {
                parts.push(message.to_string());
            }
        }
        _ => {}
    }
    if let Some(description) = map.get("description").and_then(Value::as_str) {
        parts.push(description.to_string());
    }

    if parts.is_empty() {
        return trimmed.to_string();
    }

    let mut message = parts.join(": ");
    let details = detail_messages(map.get("details"));
    if !details.is_empty() {
        message.push_str(&format!(" ({})", details.join("; ")));
    }
    message
}

fn detail_messages(details: Option<&Value>) -> Vec<String> {
    let Some(Value::Object(fields)) = details else {
        return Vec::new();
    };

    fields
        .values()
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(|entry| entry.get("description").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_error_message_code_and_description() {
        let body = r#"{"error":"RecordNotFound","description":"Not found"}"#;
        assert_eq!(api_error_message(body, 404), "RecordNotFound: Not found");
    }

    #[test]
    fn test_error_message_object_shape() {
        let body = r#"{"error":{"title":"Forbidden","message":"You do not have access to this page."}}"#;
        assert_eq!(
            api_error_message(body, 403),
            "Forbidden: You do not have access to this page."
        );
    }

    #[test]
    fn test_error_message_with_details() {
        let body = r#"{
            "error": "RecordInvalid",
            "description": "Record validation errors",
            "details": {"name": [{"description": "Name: cannot be blank", "error": "BlankValue"}]}
        }"#;
        assert_eq!(
            api_error_message(body, 422),
            "RecordInvalid: Record validation errors (Name: cannot be blank)"
        );
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(api_error_message("", 502), "HTTP 502");
        assert_eq!(api_error_message("Bad Gateway", 502), "Bad Gateway");
        assert_eq!(api_error_message(r#"{"foo":1}"#, 500), r#"{"foo":1}"#);
    }

    #[test]
    fn test_url_for_joins_without_double_slash() {
        let transport = HttpTransport::new(
            reqwest::Client::new(),
            "https://acme.zendesk.com/api/v2".to_string(),
            AuthStrategy::OAuth {
                token: SecretString::new("t".to_string().into()),
            },
            Duration::from_secs(30),
            None,
        );
        assert_eq!(
            transport.url_for("ticket_fields/42/options.json"),
            "https://acme.zendesk.com/api/v2/ticket_fields/42/options.json"
        );
        assert_eq!(
            transport.url_for("/ticket_fields.json"),
            "https://acme.zendesk.com/api/v2/ticket_fields.json"
        );
    }
}
