//! Tests for the configuration loader.

mod builder_tests;

/// Every variable the loader reads, unset, so tests start from a clean slate.
pub(super) fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    [
        "HELPDESK_BASE_URL",
        "HELPDESK_SUBDOMAIN",
        "HELPDESK_HOSTNAME",
        "HELPDESK_SCHEME",
        "HELPDESK_EMAIL",
        "HELPDESK_API_TOKEN",
        "HELPDESK_PASSWORD",
        "HELPDESK_OAUTH_TOKEN",
        "HELPDESK_SKIP_VERIFY",
        "HELPDESK_TIMEOUT",
    ]
    .into_iter()
    .map(|key| (key, None))
    .collect()
}

/// `cleared_env()` with the given overrides applied on top.
pub(super) fn env_with(
    vars: &[(&'static str, &'static str)],
) -> Vec<(&'static str, Option<&'static str>)> {
    let mut env = cleared_env();
    for (key, value) in vars {
        env.retain(|(k, _)| k != key);
        env.push((key, Some(value)));
    }
    env
}
