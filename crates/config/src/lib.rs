//! Configuration management for the helpdesk client.
//!
//! This crate provides types and a loader for helpdesk connection and
//! authentication settings sourced from `.env` files, environment
//! variables, and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig};
