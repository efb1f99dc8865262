//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.

use helpdesk_client::ClientError;

/// Structured exit codes for helpdesk-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - invalid or missing credentials.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// Resource not found - ticket field or option id does not exist.
    NotFound = 4,

    /// Validation error - missing parameters or rejected input.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - the agent lacks admin rights.
    PermissionDenied = 6,

    /// Rate limited - HTTP 429 Too Many Requests.
    RateLimited = 7,

    /// Service unavailable - HTTP 502/503/504.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Returns true if this exit code indicates a retryable condition.
    #[allow(dead_code)]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            ExitCode::ConnectionError | ExitCode::RateLimited | ExitCode::ServiceUnavailable
        )
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            // Local precondition failures (exit code 5)
            ClientError::MissingParameter { .. } => ExitCode::ValidationError,

            // Authentication errors (exit code 2)
            ClientError::MissingAuth(_) => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,

            // Connection errors (exit code 3)
            ClientError::Timeout(_) => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            // Not found (exit code 4)
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            // Validation errors (exit code 5)
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,
            ClientError::ApiError { status: 422, .. } => ExitCode::ValidationError,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,

            // Permission denied (exit code 6)
            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,

            // Rate limited (exit code 7)
            ClientError::ApiError { status: 429, .. } => ExitCode::RateLimited,

            // Service unavailable (exit code 8)
            ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,

            ClientError::ApiError { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if the error is not a ClientError.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
