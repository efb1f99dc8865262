//! Helpdesk REST API client.
//!
//! This crate provides a typed, async client for the helpdesk platform's
//! ticket field and custom field option endpoints. Resource accessors carry
//! an explicit [`ChainContext`] so nested calls can omit parent ids:
//!
//! ```rust,ignore
//! let options = client.ticket_fields().with_id(42u64).options();
//! let list = options.find_all(&Params::new()).await?;
//! ```

mod auth;
pub mod chain;
pub mod client;
pub mod error;
pub mod identifier;
pub mod metrics;
pub mod models;
pub mod resources;
pub mod routes;
pub mod transport;
pub mod url_encoding;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::AuthStrategy;
pub use chain::{ChainContext, ResourceKind};
pub use client::HelpdeskClient;
pub use client::builder::HelpdeskClientBuilder;
pub use error::{ClientError, Result};
pub use identifier::Identifier;
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    CustomFieldOption, CustomFieldOptionListResponse, CustomFieldOptionResponse, TicketField,
    TicketFieldListResponse, TicketFieldResponse, parse_response,
};
pub use resources::{FIELD_ID_PARAM, Params, ResourceDescriptor, TicketFieldOptions, TicketFields};
pub use routes::{Operation, RouteParameters, RouteTable, RouteTemplate};
pub use transport::{ApiRequest, HttpTransport, Transport};
