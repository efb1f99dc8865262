//! Ticket field options command implementation.
//!
//! Responsibilities:
//! - List, show, create, update and delete custom field options.
//! - Pass `--field-id` through as the explicit `fieldId` param.
//!
//! Does NOT handle:
//! - Checking that `--field-id` was given; the client reports a missing
//!   parent id as a validation error before any request is sent.

use anyhow::Result;
use clap::Subcommand;
use helpdesk_client::{FIELD_ID_PARAM, HelpdeskClient, HttpTransport, Params, TicketFieldOptions};
use tracing::info;

use super::{parse_assignments, parse_identifier};
use crate::formatters::{Column, OutputFormat, format_deleted, format_list, format_record};

const COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("Name", "name"),
    Column::new("Value", "value"),
    Column::new("Position", "position"),
    Column::new("Default", "default"),
];

#[derive(Debug, Subcommand)]
pub enum OptionsCommand {
    /// List the options of a field
    List {
        /// Extra query parameters (key=value)
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
    /// Show one option
    Get {
        /// Option id
        id: String,
    },
    /// Create an option
    Create {
        /// Option attributes (key=value, values parsed as JSON when possible)
        #[arg(long = "field", value_name = "KEY=VALUE", required = true)]
        fields: Vec<String>,
    },
    /// Update an option
    Update {
        /// Option id
        id: String,
        /// Attributes to change (key=value)
        #[arg(long = "field", value_name = "KEY=VALUE", required = true)]
        fields: Vec<String>,
    },
    /// Delete an option
    Delete {
        /// Option id
        id: String,
    },
}

/// Params for one call, carrying `--field-id` when given.
fn call_params(field_id: Option<&str>, mut params: Params) -> Params {
    if let Some(field_id) = field_id {
        params.insert(FIELD_ID_PARAM.to_string(), parse_identifier(field_id).to_value());
    }
    params
}

pub async fn run(
    client: &HelpdeskClient,
    field_id: Option<String>,
    command: OptionsCommand,
    format: OutputFormat,
) -> Result<()> {
    let descriptor = TicketFieldOptions::<HttpTransport>::descriptor();
    let field_id = field_id.as_deref();
    let mut options = client.ticket_field_options();

    let output = match command {
        OptionsCommand::List { params } => {
            info!(field_id = ?field_id, "Listing ticket field options");
            let params = call_params(field_id, parse_assignments(&params)?);
            let response = options.find_all(&params).await?;
            format_list(format, response.as_ref(), descriptor.object_name_plural, COLUMNS)?
        }
        OptionsCommand::Get { id } => {
            info!(field_id = ?field_id, id = %id, "Fetching ticket field option");
            let params = call_params(field_id, Params::new());
            let response = options.find(Some(parse_identifier(&id)), &params).await?;
            format_record(format, response.as_ref(), descriptor.object_name)?
        }
        OptionsCommand::Create { fields } => {
            info!(field_id = ?field_id, "Creating ticket field option");
            let params = call_params(field_id, parse_assignments(&fields)?);
            let response = options.create(params).await?;
            format_record(format, response.as_ref(), descriptor.object_name)?
        }
        OptionsCommand::Update { id, fields } => {
            info!(field_id = ?field_id, id = %id, "Updating ticket field option");
            let params = call_params(field_id, parse_assignments(&fields)?);
            let response = options.update(Some(parse_identifier(&id)), params).await?;
            format_record(format, response.as_ref(), descriptor.object_name)?
        }
        OptionsCommand::Delete { id } => {
            info!(field_id = ?field_id, id = %id, "Deleting ticket field option");
            let params = call_params(field_id, Params::new());
            let response = options.delete(Some(parse_identifier(&id)), &params).await?;
            format_deleted(format, response.as_ref(), "custom field option", &id)?
        }
    };

    println!("{output}");
    Ok(())
}
