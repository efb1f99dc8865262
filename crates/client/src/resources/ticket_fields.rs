//! Ticket field definitions.
//!
//! Uses the generic CRUD defaults unchanged. `options()` hands the chain to
//! the nested option accessor so the parent id need not be repeated.

use serde_json::Value;

use super::Params;
use super::defaults::{self, ResourceDescriptor};
use super::ticket_field_options::TicketFieldOptions;
use crate::chain::{ChainContext, ResourceKind};
use crate::error::Result;
use crate::identifier::Identifier;
use crate::routes::{RouteParameters, RouteTable, RouteTemplate};
use crate::transport::Transport;

const COLLECTION: RouteTemplate = RouteTemplate::new("ticket_fields.json");
const ITEM: RouteTemplate = RouteTemplate::new("ticket_fields/{id}.json");

const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    name: "TicketFields",
    kind: ResourceKind::TicketField,
    object_name: "ticket_field",
    object_name_plural: "ticket_fields",
    routes: RouteTable {
        find_all: COLLECTION,
        find: ITEM,
        create: COLLECTION,
        update: ITEM,
        delete: ITEM,
    },
};

/// Accessor for ticket fields.
#[derive(Debug)]
pub struct TicketFields<'a, T: Transport> {
    transport: &'a T,
    chain: ChainContext,
}

impl<'a, T: Transport> TicketFields<'a, T> {
    pub fn new(transport: &'a T, chain: ChainContext) -> Self {
        Self { transport, chain }
    }

    pub fn descriptor() -> &'static ResourceDescriptor {
        &DESCRIPTOR
    }

    pub fn chain(&self) -> &ChainContext {
        &self.chain
    }

    pub fn into_chain(self) -> ChainContext {
        self.chain
    }

    /// Remember `id` for calls that omit it, and for `options()`.
    pub fn with_id(mut self, id: impl Into<Identifier>) -> Self {
        self.chain.set(ResourceKind::TicketField, id);
        self
    }

    /// Options of the chained field.
    pub fn options(self) -> TicketFieldOptions<'a, T> {
        TicketFieldOptions::new(self.transport, self.chain)
    }

    pub async fn find_all(&self, params: &Params) -> Result<Option<Value>> {
        defaults::find_all(self.transport, &DESCRIPTOR, &RouteParameters::new(), params).await
    }

    pub async fn find(&self, id: Option<Identifier>) -> Result<Option<Value>> {
        defaults::find(self.transport, &DESCRIPTOR, &self.chain, id, RouteParameters::new()).await
    }

    pub async fn create(&mut self, fields: Params) -> Result<Option<Value>> {
        defaults::create(
            self.transport,
            &DESCRIPTOR,
            &mut self.chain,
            &RouteParameters::new(),
            fields,
        )
        .await
    }

    pub async fn update(&mut self, id: Option<Identifier>, fields: Params) -> Result<Option<Value>> {
        defaults::update(
            self.transport,
            &DESCRIPTOR,
            &mut self.chain,
            id,
            RouteParameters::new(),
            fields,
        )
        .await
    }

    pub async fn delete(&self, id: Option<Identifier>) -> Result<Option<Value>> {
        defaults::delete(self.transport, &DESCRIPTOR, &self.chain, id, RouteParameters::new()).await
    }
}
