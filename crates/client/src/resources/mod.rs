//! Resource accessors.
//!
//! Each resource type pairs a static [`defaults::ResourceDescriptor`] with a
//! borrowed [`Transport`](crate::transport::Transport) and an owned
//! [`ChainContext`](crate::chain::ChainContext). Generic CRUD behavior lives in
//! [`defaults`]; resource types call it explicitly and override only the
//! operations whose API contract differs.

pub mod defaults;
mod ticket_field_options;
mod ticket_fields;

/// Caller-supplied parameter or field mapping.
pub type Params = serde_json::Map<String, serde_json::Value>;

pub use defaults::ResourceDescriptor;
pub use ticket_field_options::{FIELD_ID_PARAM, TicketFieldOptions};
pub use ticket_fields::TicketFields;
