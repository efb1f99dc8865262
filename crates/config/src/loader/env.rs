//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric or boolean values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(key: &str, hint: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: hint.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("HELPDESK_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(subdomain) = env_var_or_none("HELPDESK_SUBDOMAIN") {
        loader.set_subdomain(Some(subdomain));
    }
    if let Some(hostname) = env_var_or_none("HELPDESK_HOSTNAME") {
        loader.set_hostname(Some(hostname));
    }
    if let Some(scheme) = env_var_or_none("HELPDESK_SCHEME") {
        loader.set_scheme(Some(scheme));
    }
    if let Some(email) = env_var_or_none("HELPDESK_EMAIL") {
        loader.set_email(Some(email));
    }
    if let Some(token) = env_var_or_none("HELPDESK_API_TOKEN") {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(password) = env_var_or_none("HELPDESK_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(token) = env_var_or_none("HELPDESK_OAUTH_TOKEN") {
        loader.set_oauth_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = parse_env::<bool>("HELPDESK_SKIP_VERIFY", "must be true or false")? {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = parse_env::<u64>("HELPDESK_TIMEOUT", "must be a number")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    Ok(())
}
