//! Generic CRUD operations shared by resource types.
//!
//! Responsibilities:
//! - Render the descriptor's route for an operation and dispatch it.
//! - Resolve a record id from an explicit argument or the chain.
//! - Wrap outgoing fields under the resource's canonical object name.
//! - Remember ids returned by create/update in the chain.
//!
//! Defaults follow the REST conventions of the platform: GET list, GET item,
//! POST collection, PUT item, DELETE item. Resource types whose API contract
//! differs call [`dispatch`] directly for those operations.

use reqwest::Method;
use serde_json::{Map, Value};
use tracing::debug;

use super::Params;
use crate::chain::{ChainContext, ResourceKind};
use crate::error::{ClientError, Result};
use crate::identifier::Identifier;
use crate::routes::{Operation, RouteParameters, RouteTable};
use crate::transport::{ApiRequest, Transport, query_pairs};

/// Static description of a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Type name used in error messages, e.g. `TicketFieldOptions`.
    pub name: &'static str,
    pub kind: ResourceKind,
    /// Root key of single-record payloads.
    pub object_name: &'static str,
    /// Root key of list payloads.
    pub object_name_plural: &'static str,
    pub routes: RouteTable,
}

impl ResourceDescriptor {
    /// `Type::operation`, as reported in `MissingParameter` errors.
    pub fn operation_name(&self, operation: Operation) -> String {
        format!("{}::{}", self.name, operation)
    }

    /// `{ "<object_name>": fields }`
    pub fn wrap(&self, fields: Params) -> Value {
        let mut root = Map::with_capacity(1);
        root.insert(self.object_name.to_string(), Value::Object(fields));
        Value::Object(root)
    }

    /// The `id` of the record inside a single-record response, if present.
    pub fn record_id(&self, response: Option<&Value>) -> Option<Identifier> {
        response?
            .get(self.object_name)?
            .get("id")
            .and_then(Identifier::non_empty_from_value)
    }
}

/// Use `id` when non-empty, otherwise the chain's value for this resource kind.
pub fn resolve_id(
    descriptor: &ResourceDescriptor,
    chain: &ChainContext,
    id: Option<Identifier>,
    operation: Operation,
) -> Result<Identifier> {
    id.filter(|id| !id.is_empty())
        .or_else(|| chain.get(descriptor.kind).cloned())
        .ok_or_else(|| ClientError::missing_parameter(descriptor.operation_name(operation), &["id"]))
}

/// Record the id returned in `response` as the chain value for this kind.
pub fn remember(descriptor: &ResourceDescriptor, chain: &mut ChainContext, response: Option<&Value>) {
    if let Some(id) = descriptor.record_id(response) {
        debug!(kind = descriptor.kind.as_str(), id = %id, "Chaining returned record id");
        chain.set(descriptor.kind, id);
    }
}

/// Render the route for `operation` and send one request.
pub async fn dispatch<T: Transport>(
    transport: &T,
    descriptor: &ResourceDescriptor,
    operation: Operation,
    method: Method,
    route_params: &RouteParameters,
    query: Vec<(String, String)>,
    body: Option<Value>,
) -> Result<Option<Value>> {
    let route = descriptor.routes.get(operation);
    let path = route.render(route_params, &descriptor.operation_name(operation))?;

    let mut request = ApiRequest::new(method, route, path).with_query(query);
    if let Some(body) = body {
        request = request.with_body(body);
    }
    transport.send(request).await
}

/// GET the collection route; `params` become query parameters.
pub async fn find_all<T: Transport>(
    transport: &T,
    descriptor: &ResourceDescriptor,
    route_params: &RouteParameters,
    params: &Params,
) -> Result<Option<Value>> {
    dispatch(
        transport,
        descriptor,
        Operation::FindAll,
        Method::GET,
        route_params,
        query_pairs(params),
        None,
    )
    .await
}

/// GET a single record.
pub async fn find<T: Transport>(
    transport: &T,
    descriptor: &ResourceDescriptor,
    chain: &ChainContext,
    id: Option<Identifier>,
    mut route_params: RouteParameters,
) -> Result<Option<Value>> {
    let id = resolve_id(descriptor, chain, id, Operation::Find)?;
    route_params.insert("id", id);

    dispatch(
        transport,
        descriptor,
        Operation::Find,
        Method::GET,
        &route_params,
        Vec::new(),
        None,
    )
    .await
}

/// POST a wrapped record to the collection route.
pub async fn create<T: Transport>(
    transport: &T,
    descriptor: &ResourceDescriptor,
    chain: &mut ChainContext,
    route_params: &RouteParameters,
    fields: Params,
) -> Result<Option<Value>> {
    let response = dispatch(
        transport,
        descriptor,
        Operation::Create,
        Method::POST,
        route_params,
        Vec::new(),
        Some(descriptor.wrap(fields)),
    )
    .await?;

    remember(descriptor, chain, response.as_ref());
    Ok(response)
}

/// PUT wrapped fields to the record route.
pub async fn update<T: Transport>(
    transport: &T,
    descriptor: &ResourceDescriptor,
    chain: &mut ChainContext,
    id: Option<Identifier>,
    mut route_params: RouteParameters,
    fields: Params,
) -> Result<Option<Value>> {
    let id = resolve_id(descriptor, chain, id, Operation::Update)?;
    route_params.insert("id", id);

    let response = dispatch(
        transport,
        descriptor,
        Operation::Update,
        Method::PUT,
        &route_params,
        Vec::new(),
        Some(descriptor.wrap(fields)),
    )
    .await?;

    remember(descriptor, chain, response.as_ref());
    Ok(response)
}

/// DELETE the record route.
pub async fn delete<T: Transport>(
    transport: &T,
    descriptor: &ResourceDescriptor,
    chain: &ChainContext,
    id: Option<Identifier>,
    mut route_params: RouteParameters,
) -> Result<Option<Value>> {
    let id = resolve_id(descriptor, chain, id, Operation::Delete)?;
    route_params.insert("id", id);

    dispatch(
        transport,
        descriptor,
        Operation::Delete,
        Method::DELETE,
        &route_params,
        Vec::new(),
        None,
    )
    .await
}
