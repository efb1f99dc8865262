//! Connection configuration types.
//!
//! Invariants:
//! - Duration fields are serialized as whole seconds.
//! - `base_url` never carries a trailing slash.

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the helpdesk API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// API base URL, e.g. `https://acme.zendesk.com/api/v2`
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed test proxies)
    #[serde(default)]
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config using email + API token authentication.
    pub fn with_api_token(base_url: String, email: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig {
                strategy: AuthStrategy::ApiToken { email, token },
            },
        }
    }

    /// Create a config using an OAuth access token.
    pub fn with_oauth_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig {
                strategy: AuthStrategy::OAuth { token },
            },
        }
    }
}
