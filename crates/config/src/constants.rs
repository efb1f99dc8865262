//! Centralized constants for the helpdesk workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Endpoint Defaults
// =============================================================================

/// Default URL scheme used when the base URL is derived from a subdomain.
pub const DEFAULT_SCHEME: &str = "https";

/// Default platform hostname; accounts live at `{subdomain}.{hostname}`.
pub const DEFAULT_HOSTNAME: &str = "zendesk.com";

/// REST API version segment appended to derived base URLs.
pub const DEFAULT_API_VERSION: &str = "v2";
