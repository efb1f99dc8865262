//! Helpdesk REST API client.
//!
//! This module provides [`HelpdeskClient`], the entry point that owns a
//! transport and hands out resource accessors.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Request execution (delegated to [`crate::transport`])
//! - Route templates and CRUD defaults (delegated to [`crate::resources`])
//!
//! # Invariants
//! - Every accessor starts from its own [`ChainContext`]; chained ids never
//!   leak between accessors unless the caller passes a context along.

pub mod builder;

use crate::chain::ChainContext;
use crate::resources::{TicketFieldOptions, TicketFields};
use crate::transport::{HttpTransport, Transport};

/// Helpdesk REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use helpdesk_client::{AuthStrategy, HelpdeskClient};
/// use secrecy::SecretString;
///
/// let client = HelpdeskClient::builder()
///     .base_url("https://acme.zendesk.com/api/v2".to_string())
///     .auth_strategy(AuthStrategy::ApiToken {
///         email: "agent@acme.com".to_string(),
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .build()?;
///
/// let options = client
///     .ticket_fields()
///     .with_id(42u64)
///     .options()
///     .find_all(&Params::new())
///     .await?;
/// ```
///
/// Any [`Transport`] can stand in for the default HTTP transport via
/// [`HelpdeskClient::with_transport`].
#[derive(Debug)]
pub struct HelpdeskClient<T: Transport = HttpTransport> {
    transport: T,
}

impl HelpdeskClient<HttpTransport> {
    /// Create a new client builder.
    pub fn builder() -> builder::HelpdeskClientBuilder {
        builder::HelpdeskClientBuilder::new()
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }
}

impl<T: Transport> HelpdeskClient<T> {
    /// Drive the client with a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Ticket field accessor with an empty chain.
    pub fn ticket_fields(&self) -> TicketFields<'_, T> {
        TicketFields::new(&self.transport, ChainContext::new())
    }

    /// Ticket field option accessor with an empty chain.
    ///
    /// Every call must then supply `fieldId` unless
    /// [`TicketFieldOptions::with_field_id`] is used.
    pub fn ticket_field_options(&self) -> TicketFieldOptions<'_, T> {
        self.ticket_field_options_with(ChainContext::new())
    }

    /// Ticket field option accessor continuing an existing chain.
    pub fn ticket_field_options_with(&self, chain: ChainContext) -> TicketFieldOptions<'_, T> {
        TicketFieldOptions::new(&self.transport, chain)
    }
}
