//! Request authentication.
//!
//! The helpdesk API accepts three credential forms:
//! - API token: basic auth with username `{email}/token` and the token as password
//! - Password: basic auth with the agent email and password
//! - OAuth: bearer token
//!
//! There is no session to manage; every request carries its credentials.

use reqwest::RequestBuilder;
use secrecy::ExposeSecret;

pub use helpdesk_config::AuthStrategy;

/// Attach the credentials for `strategy` to an outgoing request.
pub(crate) fn authorize(builder: RequestBuilder, strategy: &AuthStrategy) -> RequestBuilder {
    match strategy {
        AuthStrategy::ApiToken { email, token } => {
            builder.basic_auth(format!("{email}/token"), Some(token.expose_secret()))
        }
        AuthStrategy::Password { email, password } => {
            builder.basic_auth(email, Some(password.expose_secret()))
        }
        AuthStrategy::OAuth { token } => builder.bearer_auth(token.expose_secret()),
    }
}
