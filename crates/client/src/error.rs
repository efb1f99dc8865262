//! Error types for the helpdesk client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during helpdesk client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A required route or record parameter could not be resolved.
    ///
    /// Raised before any request is sent.
    #[error("Missing parameters: [{}] must be supplied for {operation}", .params.join(", "))]
    MissingParameter {
        operation: String,
        params: Vec<String>,
    },

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the helpdesk API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid URL or missing base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Client was built without credentials.
    #[error("Authentication is not configured: {0}")]
    MissingAuth(String),

    /// Response body could not be parsed.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Build a `MissingParameter` error for `operation`.
    pub fn missing_parameter(operation: impl Into<String>, params: &[&str]) -> Self {
        Self::MissingParameter {
            operation: operation.into(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Whether this is a local precondition failure rather than a transport error.
    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, Self::MissingParameter { .. })
    }

    /// Names of the parameters that could not be resolved, if any.
    pub fn missing_parameters(&self) -> &[String] {
        match self {
            Self::MissingParameter { params, .. } => params,
            _ => &[],
        }
    }

    /// HTTP status of an API error response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error is a 404 from the API.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error indicates an authentication or permission failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403)) || matches!(self, Self::MissingAuth(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_display() {
        let err = ClientError::missing_parameter("TicketFieldOptions::find_all", &["fieldId"]);
        assert_eq!(
            err.to_string(),
            "Missing parameters: [fieldId] must be supplied for TicketFieldOptions::find_all"
        );
        assert!(err.is_missing_parameter());
        assert_eq!(err.missing_parameters(), ["fieldId".to_string()]);
    }

    #[test]
    fn test_missing_parameter_multiple_names() {
        let err = ClientError::missing_parameter("op", &["fieldId", "id"]);
        assert!(err.to_string().contains("[fieldId, id]"));
    }

    #[test]
    fn test_api_error_helpers() {
        let err = ClientError::ApiError {
            status: 404,
            url: "https://acme.zendesk.com/api/v2/ticket_fields/1.json".to_string(),
            message: "RecordNotFound: Not found".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_auth_error());
        assert!(!err.is_missing_parameter());
        assert!(err.missing_parameters().is_empty());

        let err = ClientError::ApiError {
            status: 401,
            url: String::new(),
            message: String::new(),
        };
        assert!(err.is_auth_error());
    }

    #[test]
    fn test_timeout_is_not_api_error() {
        let err = ClientError::Timeout(Duration::from_secs(1));
        assert_eq!(err.status(), None);
    }
}
