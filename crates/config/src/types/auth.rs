//! Authentication types for helpdesk configuration.
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization includes secrets; secrecy is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Strategy for authenticating with the helpdesk API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthStrategy {
    /// Agent email plus API token, sent as basic auth `{email}/token:{token}`.
    #[serde(rename = "token")]
    ApiToken {
        email: String,
        #[serde(with = "secret_string")]
        token: SecretString,
    },
    /// Agent email plus password, sent as plain basic auth.
    #[serde(rename = "password")]
    Password {
        email: String,
        #[serde(with = "secret_string")]
        password: SecretString,
    },
    /// OAuth access token, sent as a bearer token.
    #[serde(rename = "oauth")]
    OAuth {
        #[serde(with = "secret_string")]
        token: SecretString,
    },
}

impl AuthStrategy {
    /// Short label for logs; never includes secret material.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ApiToken { .. } => "token",
            Self::Password { .. } => "password",
            Self::OAuth { .. } => "oauth",
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}
