//! Metrics collection for helpdesk API calls.
//!
//! This module records, through the `metrics` crate facade:
//! - Request latency histograms
//! - Request counters
//! - Error counters by category
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a recorder in the host application)
//!
//! # Invariants
//! - All metrics use the label names `route`, `method`, `status`, `error_category`
//! - `route` is the unrendered template, so label cardinality stays bounded
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "helpdesk_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "helpdesk_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "helpdesk_api_errors_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connection-level failures
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Request timeout
    Timeout,
    /// Body could not be parsed
    InvalidResponse,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::InvalidResponse => "invalid_response",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::InvalidResponse(_) => ErrorCategory::InvalidResponse,
            ClientError::ApiError { status, .. } if (400..500).contains(status) => {
                ErrorCategory::Http4xx
            }
            ClientError::ApiError { status, .. } if (500..600).contains(status) => {
                ErrorCategory::Http5xx
            }
            ClientError::HttpError(e) if e.is_connect() || e.is_request() => {
                ErrorCategory::Transport
            }
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for helpdesk API calls.
///
/// A thin wrapper around the `metrics` macros giving consistent labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a request attempt.
    pub fn record_request(&self, route: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "route" => route.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record the duration of a request.
    ///
    /// `status` is `None` when no response was received.
    pub fn record_request_duration(
        &self,
        route: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "route" => route.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record an error, categorized from the client error.
    pub fn record_client_error(&self, route: &str, method: &str, error: &ClientError) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "route" => route.to_string(),
            "method" => method.to_string(),
            "error_category" => ErrorCategory::from(error).as_str(),
        )
        .increment(1);
    }
}
