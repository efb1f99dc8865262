//! Builder validation tests for the configuration loader.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;
use std::time::Duration;

fn base() -> ConfigLoader {
    ConfigLoader::new().with_base_url("https://acme.zendesk.com/api/v2".to_string())
}

#[test]
fn test_missing_base_url() {
    let result = ConfigLoader::new()
        .with_oauth_token("tok".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
}

#[test]
fn test_blank_subdomain_is_missing_base_url() {
    let result = ConfigLoader::new()
        .with_subdomain("  ".to_string())
        .with_oauth_token("tok".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
}

#[test]
fn test_invalid_scheme_rejected() {
    let result = ConfigLoader::new()
        .with_base_url("ftp://acme.zendesk.com".to_string())
        .with_oauth_token("tok".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_missing_auth() {
    assert!(matches!(base().build(), Err(ConfigError::MissingAuth)));
}

#[test]
fn test_api_token_requires_email() {
    let result = base().with_api_token("abc".to_string()).build();
    assert!(matches!(result, Err(ConfigError::MissingEmail(_))));
}

#[test]
fn test_password_auth() {
    let config = base()
        .with_email("agent@acme.com".to_string())
        .with_password("hunter2".to_string())
        .build()
        .unwrap();
    assert!(matches!(
        config.auth.strategy,
        AuthStrategy::Password { ref email, .. } if email == "agent@acme.com"
    ));
}

#[test]
fn test_oauth_takes_precedence() {
    let config = base()
        .with_email("agent@acme.com".to_string())
        .with_api_token("abc".to_string())
        .with_oauth_token("oauth".to_string())
        .build()
        .unwrap();
    assert!(matches!(config.auth.strategy, AuthStrategy::OAuth { .. }));
}

#[test]
fn test_api_token_takes_precedence_over_password() {
    let config = base()
        .with_email("agent@acme.com".to_string())
        .with_password("hunter2".to_string())
        .with_api_token("abc".to_string())
        .build()
        .unwrap();
    assert!(matches!(config.auth.strategy, AuthStrategy::ApiToken { .. }));
}

#[test]
fn test_zero_timeout_rejected() {
    let result = base()
        .with_oauth_token("tok".to_string())
        .with_timeout(Duration::from_secs(0))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_excessive_timeout_rejected() {
    let result = base()
        .with_oauth_token("tok".to_string())
        .with_timeout(Duration::from_secs(7200))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_defaults_applied() {
    let config = base().with_oauth_token("tok".to_string()).build().unwrap();
    assert_eq!(config.connection.timeout, Duration::from_secs(30));
    assert!(!config.connection.skip_verify);
}
