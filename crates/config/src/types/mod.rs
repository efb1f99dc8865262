//! Configuration types for the helpdesk client.
//!
//! Responsibilities:
//! - Define authentication strategies with secret-safe storage.
//! - Define connection settings and the top-level `Config`.
//!
//! Does NOT handle:
//! - Loading values from the environment (see `loader`).
//! - Applying credentials to HTTP requests (see the client crate).

mod auth;
mod connection;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
