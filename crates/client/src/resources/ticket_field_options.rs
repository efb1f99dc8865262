//! Custom field options nested under a ticket field.
//!
//! Responsibilities:
//! - Resolve the parent `fieldId` from the call's params or the chain.
//! - List, fetch and delete options through the generic CRUD helper.
//! - Create and update options by POSTing to the option collection route,
//!   which is how the platform accepts both.
//!
//! Does NOT handle:
//! - Reordering options or replacing the whole list (that goes through the
//!   parent field's `custom_field_options`).

use reqwest::Method;
use serde_json::Value;

use super::Params;
use super::defaults::{self, ResourceDescriptor};
use crate::chain::{ChainContext, ResourceKind};
use crate::error::{ClientError, Result};
use crate::identifier::Identifier;
use crate::routes::{Operation, RouteParameters, RouteTable, RouteTemplate};
use crate::transport::Transport;

/// Param key carrying an explicit parent ticket field id.
pub const FIELD_ID_PARAM: &str = "fieldId";

const COLLECTION: RouteTemplate = RouteTemplate::new("ticket_fields/{fieldId}/options.json");
const ITEM: RouteTemplate = RouteTemplate::new("ticket_fields/{fieldId}/options/{id}.json");

const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
    name: "TicketFieldOptions",
    kind: ResourceKind::TicketFieldOption,
    object_name: "custom_field_option",
    object_name_plural: "custom_field_options",
    routes: RouteTable {
        find_all: COLLECTION,
        find: ITEM,
        create: COLLECTION,
        update: COLLECTION,
        delete: ITEM,
    },
};

/// Accessor for the options of one ticket field.
///
/// The parent field id is taken from the `fieldId` param of each call when
/// given, otherwise from the chain (see [`TicketFieldOptions::with_field_id`]
/// and `TicketFields::options`).
///
/// # Example
/// ```ignore
/// let mut options = client.ticket_field_options().with_field_id(42u64);
/// let mut fields = Params::new();
/// fields.insert("name".into(), "Urgent".into());
/// options.create(fields).await?;
/// ```
#[derive(Debug)]
pub struct TicketFieldOptions<'a, T: Transport> {
    transport: &'a T,
    chain: ChainContext,
}

impl<'a, T: Transport> TicketFieldOptions<'a, T> {
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

    /// Remember `field_id` as the parent for calls that omit `fieldId`.
    pub fn with_field_id(mut self, field_id: impl Into<Identifier>) -> Self {
        self.chain.set(ResourceKind::TicketField, field_id);
        self
    }

    /// Remember `id` as the option for `find`/`update`/`delete` calls that omit it.
    pub fn with_id(mut self, id: impl Into<Identifier>) -> Self {
        self.chain.set(ResourceKind::TicketFieldOption, id);
        self
    }

    /// List the options of the parent field.
    ///
    /// Params other than `fieldId` are sent as query parameters.
    pub async fn find_all(&self, params: &Params) -> Result<Option<Value>> {
        let route_params = self.resolve_field_id(params, Operation::FindAll)?;

        let mut query = params.clone();
        query.remove(FIELD_ID_PARAM);

        defaults::find_all(self.transport, &DESCRIPTOR, &route_params, &query).await
    }

    /// Fetch one option; `None` or an empty id falls back to the chained option.
    pub async fn find(&self, id: Option<Identifier>, params: &Params) -> Result<Option<Value>> {
        let route_params = self.resolve_field_id(params, Operation::Find)?;

        defaults::find(self.transport, &DESCRIPTOR, &self.chain, id, route_params).await
    }

    /// Create an option from `params`; `fieldId` is not sent in the body.
    pub async fn create(&mut self, mut params: Params) -> Result<Option<Value>> {
        let route_params = self.resolve_field_id(&params, Operation::Create)?;
        params.remove(FIELD_ID_PARAM);

        defaults::create(
            self.transport,
            &DESCRIPTOR,
            &mut self.chain,
            &route_params,
            params,
        )
        .await
    }

    /// Update an option.
    ///
    /// The resolved id is written into the body as `id` and the record is
    /// POSTed to the collection route, not PUT to the item route.
    pub async fn update(&mut self, id: Option<Identifier>, mut fields: Params) -> Result<Option<Value>> {
        let route_params = self.resolve_field_id(&fields, Operation::Update)?;
        let id = defaults::resolve_id(&DESCRIPTOR, &self.chain, id, Operation::Update)?;

        fields.remove(FIELD_ID_PARAM);
        fields.insert("id".to_string(), id.to_value());

        let response = defaults::dispatch(
            self.transport,
            &DESCRIPTOR,
            Operation::Update,
            Method::POST,
            &route_params,
            Vec::new(),
            Some(DESCRIPTOR.wrap(fields)),
        )
        .await?;

        defaults::remember(&DESCRIPTOR, &mut self.chain, response.as_ref());
        Ok(response)
    }

    /// Delete an option.
    pub async fn delete(&self, id: Option<Identifier>, params: &Params) -> Result<Option<Value>> {
        let route_params = self.resolve_field_id(params, Operation::Delete)?;

        defaults::delete(self.transport, &DESCRIPTOR, &self.chain, id, route_params).await
    }

    /// Route parameters holding the parent field id for this call only.
    fn resolve_field_id(&self, params: &Params, operation: Operation) -> Result<RouteParameters> {
        let field_id = params
            .get(FIELD_ID_PARAM)
            .and_then(Identifier::non_empty_from_value)
            .or_else(|| self.chain.get(ResourceKind::TicketField).cloned())
            .ok_or_else(|| {
                ClientError::missing_parameter(DESCRIPTOR.operation_name(operation), &[FIELD_ID_PARAM])
            })?;

        Ok(RouteParameters::new().with(FIELD_ID_PARAM, field_id))
    }
}
