//! Error types for configuration loading.
//!
//! Invariants:
//! - All error variants include enough context to locate the bad input.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error(
        "Base URL is required. Set HELPDESK_BASE_URL or HELPDESK_SUBDOMAIN (e.g. 'acme' for acme.zendesk.com)."
    )]
    MissingBaseUrl,

    #[error(
        "Authentication configuration is required (API token, password, or OAuth token)"
    )]
    MissingAuth,

    #[error("An agent email is required for {0} authentication. Set HELPDESK_EMAIL.")]
    MissingEmail(&'static str),

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
