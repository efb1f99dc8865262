//! Shared test utilities for helpdesk-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup (credentials, base URLs).
//!
//! Invariants / Assumptions:
//! - `HELPDESK_EMAIL` / `HELPDESK_API_TOKEN` are set to dummy values unless overridden.

use assert_cmd::Command;

/// Basic credentials produced by [`TEST_EMAIL`] and [`TEST_TOKEN`].
#[allow(dead_code)]
pub const TEST_AUTH_HEADER: &str = "Basic YWdlbnRAYWNtZS5jb20vdG9rZW46dGVzdC10b2tlbg==";

pub const TEST_EMAIL: &str = "agent@acme.com";
pub const TEST_TOKEN: &str = "test-token";

/// Returns a hermetic `helpdesk-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - API token credentials are set to satisfy config validation.
/// - Other connection and credential env vars are cleared.
pub fn helpdesk_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("helpdesk-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("HELPDESK_EMAIL", TEST_EMAIL);
    cmd.env("HELPDESK_API_TOKEN", TEST_TOKEN);

    // Clear potential host leakage
    cmd.env_remove("HELPDESK_BASE_URL")
        .env_remove("HELPDESK_SUBDOMAIN")
        .env_remove("HELPDESK_HOSTNAME")
        .env_remove("HELPDESK_SCHEME")
        .env_remove("HELPDESK_PASSWORD")
        .env_remove("HELPDESK_OAUTH_TOKEN")
        .env_remove("HELPDESK_TIMEOUT")
        .env_remove("HELPDESK_SKIP_VERIFY");

    cmd
}

/// Returns a hermetic `helpdesk-cli` command pointed at `base_url`.
#[allow(dead_code)]
pub fn helpdesk_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = helpdesk_cmd();
    cmd.env("HELPDESK_BASE_URL", base_url);
    cmd
}

/// API root on a mock server, mirroring the `/api/v2` prefix of real accounts.
#[allow(dead_code)]
pub fn api_base(server: &wiremock::MockServer) -> String {
    format!("{}/api/v2", server.uri())
}
