//! Client builder for constructing [`HelpdeskClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, auth_strategy)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, redirects, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by the resource accessors)
//! - Reading configuration from the environment (handled by `helpdesk-config`)
//!
//! # Invariants
//! - `base_url` and `auth_strategy` must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::auth::AuthStrategy;
use crate::client::HelpdeskClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::transport::HttpTransport;
use helpdesk_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`HelpdeskClient`].
///
/// # Example
///
/// ```rust,ignore
/// use helpdesk_client::{AuthStrategy, HelpdeskClient};
/// use secrecy::SecretString;
///
/// let client = HelpdeskClient::builder()
///     .base_url("https://acme.zendesk.com/api/v2".to_string())
///     .auth_strategy(AuthStrategy::OAuth {
///         token: SecretString::new("access-token".to_string().into()),
///     })
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct HelpdeskClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    skip_verify: bool,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for HelpdeskClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl HelpdeskClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, e.g. `https://acme.zendesk.com/api/v2`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against local test proxies. Disabling TLS verification
    /// makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the metrics collector for request tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Pre-configure the builder from a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = Some(config.auth.strategy.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://acme.zendesk.com/api/v2/"` -> `"https://acme.zendesk.com/api/v2"`
    /// - `"https://acme.zendesk.com/api/v2//"` -> `"https://acme.zendesk.com/api/v2"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`HelpdeskClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::MissingAuth`] if `auth_strategy` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<HelpdeskClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let auth_strategy = self
            .auth_strategy
            .ok_or_else(|| ClientError::MissingAuth("auth_strategy is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;
        let transport = HttpTransport::new(http, base_url, auth_strategy, self.timeout, self.metrics);

        Ok(HelpdeskClient::with_transport(transport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_from_config_with_api_token() {
        let config = Config::with_api_token(
            "https://acme.zendesk.com/api/v2".to_string(),
            "agent@acme.com".to_string(),
            SecretString::new("test-token".to_string().into()),
        );

        let client = HelpdeskClient::builder().from_config(&config).build().unwrap();

        assert_eq!(client.base_url(), "https://acme.zendesk.com/api/v2");
        assert_eq!(client.transport().auth_strategy().kind(), "token");
    }

    #[test]
    fn test_from_config_with_oauth_token() {
        let config = Config::with_oauth_token(
            "https://acme.zendesk.com/api/v2".to_string(),
            SecretString::new("access".to_string().into()),
        );

        let client = HelpdeskClient::builder().from_config(&config).build().unwrap();

        assert!(matches!(
            client.transport().auth_strategy(),
            AuthStrategy::OAuth { .. }
        ));
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::with_api_token(
            "https://acme.zendesk.com/api/v2".to_string(),
            "agent@acme.com".to_string(),
            SecretString::new("test-token".to_string().into()),
        );
        config.connection.skip_verify = true;
        config.connection.timeout = Duration::from_secs(120);

        let builder = HelpdeskClient::builder().from_config(&config);

        assert_eq!(
            builder.base_url,
            Some("https://acme.zendesk.com/api/v2".to_string())
        );
        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            HelpdeskClientBuilder::normalize_base_url("https://acme.zendesk.com/api/v2/".to_string()),
            "https://acme.zendesk.com/api/v2"
        );
        assert_eq!(
            HelpdeskClientBuilder::normalize_base_url("https://acme.zendesk.com/api/v2".to_string()),
            "https://acme.zendesk.com/api/v2"
        );
        assert_eq!(
            HelpdeskClientBuilder::normalize_base_url("https://acme.zendesk.com/api/v2//".to_string()),
            "https://acme.zendesk.com/api/v2"
        );
    }
}
