//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` merging env values and overrides.
//! - Derive the API base URL from a subdomain when no explicit URL is given.
//! - Build and validate the final `Config`.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables when called after `from_env()`.
//! - An explicit base URL wins over a subdomain-derived one.
//! - OAuth token wins over API token, which wins over password.

use secrecy::SecretString;
use std::time::Duration;
use tracing::debug;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_API_VERSION, DEFAULT_HOSTNAME, DEFAULT_SCHEME, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    subdomain: Option<String>,
    hostname: Option<String>,
    scheme: Option<String>,
    email: Option<String>,
    api_token: Option<SecretString>,
    password: Option<SecretString>,
    oauth_token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not
    /// loaded. Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the API base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the account subdomain.
    pub fn with_subdomain(mut self, subdomain: String) -> Self {
        self.subdomain = Some(subdomain);
        self
    }

    /// Set the agent email.
    pub fn with_email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }

    /// Set the API token.
    pub fn with_api_token(mut self, token: String) -> Self {
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the OAuth access token.
    pub fn with_oauth_token(mut self, token: String) -> Self {
        self.oauth_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_subdomain(&mut self, subdomain: Option<String>) {
        self.subdomain = subdomain;
    }

    pub(crate) fn set_hostname(&mut self, hostname: Option<String>) {
        self.hostname = hostname;
    }

    pub(crate) fn set_scheme(&mut self, scheme: Option<String>) {
        self.scheme = scheme;
    }

    pub(crate) fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }

    pub(crate) fn set_api_token(&mut self, token: Option<SecretString>) {
        self.api_token = token;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_oauth_token(&mut self, token: Option<SecretString>) {
        self.oauth_token = token;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    /// The base URL the loader would use, explicit or derived from the subdomain.
    fn resolve_base_url(&self) -> Result<String, ConfigError> {
        if let Some(url) = self.base_url.as_deref() {
            return validate_and_normalize_base_url(url);
        }

        let subdomain = self
            .subdomain
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;
        let scheme = self.scheme.as_deref().unwrap_or(DEFAULT_SCHEME);
        let hostname = self.hostname.as_deref().unwrap_or(DEFAULT_HOSTNAME);

        validate_and_normalize_base_url(&format!(
            "{scheme}://{subdomain}.{hostname}/api/{DEFAULT_API_VERSION}"
        ))
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self.resolve_base_url()?;

        let strategy = if let Some(token) = self.oauth_token {
            AuthStrategy::OAuth { token }
        } else if let Some(token) = self.api_token {
            let email = self.email.ok_or(ConfigError::MissingEmail("API token"))?;
            AuthStrategy::ApiToken { email, token }
        } else if let Some(password) = self.password {
            let email = self.email.ok_or(ConfigError::MissingEmail("password"))?;
            AuthStrategy::Password { email, password }
        } else {
            return Err(ConfigError::MissingAuth);
        };

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        debug!(base_url = %base_url, auth = strategy.kind(), "Built helpdesk configuration");

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
            },
            auth: AuthConfig { strategy },
        })
    }
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();

    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }

    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }

    Ok(())
}

fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://acme.zendesk.com/api/v2): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. https://acme.zendesk.com/api/v2)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
