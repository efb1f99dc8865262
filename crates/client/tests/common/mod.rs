//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the helpdesk client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients point at `{mock_server}/api/v2`, so mock paths start with `/api/v2/`
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use secrecy::SecretString;
use serde_json::Value;

// Re-export test utilities from helpdesk-client
#[allow(unused_imports)]
pub use helpdesk_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use helpdesk_client::{
    AuthStrategy, ChainContext, ClientError, HelpdeskClient, Identifier, Params, ResourceKind,
};
#[allow(unused_imports)]
pub use serde_json::json;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Credentials used by [`client_for`].
#[allow(dead_code)]
pub fn api_token_auth() -> AuthStrategy {
    AuthStrategy::ApiToken {
        email: "agent@acme.com".to_string(),
        token: SecretString::new("test-token".to_string().into()),
    }
}

/// Base URL of the API behind `server`.
#[allow(dead_code)]
pub fn api_base(server: &MockServer) -> String {
    format!("{}/api/v2", server.uri())
}

/// HTTP client pointed at `server` with API token auth.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> HelpdeskClient {
    client_with_auth(server, api_token_auth())
}

#[allow(dead_code)]
pub fn client_with_auth(server: &MockServer, auth: AuthStrategy) -> HelpdeskClient {
    HelpdeskClient::builder()
        .base_url(api_base(server))
        .auth_strategy(auth)
        .build()
        .expect("client should build")
}

/// Convert a JSON object literal into call params.
#[allow(dead_code)]
pub fn params(value: Value) -> Params {
    value
        .as_object()
        .cloned()
        .expect("params must be a JSON object")
}

/// Mount a mock that fails verification if any request reaches the server.
#[allow(dead_code)]
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}
