//! Ticket fields command implementation.
//!
//! Responsibilities:
//! - List, show, create, update and delete ticket fields.
//! - Format output via shared formatters.
//!
//! Does NOT handle:
//! - Field options (see `options` module).
//! - Direct REST API calls (handled by client crate).

use anyhow::Result;
use clap::Subcommand;
use helpdesk_client::{HelpdeskClient, HttpTransport, TicketFields};
use tracing::info;

use super::{parse_assignments, parse_identifier};
use crate::formatters::{Column, OutputFormat, format_deleted, format_list, format_record};

const COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("Type", "type"),
    Column::new("Title", "title"),
    Column::new("Active", "active"),
    Column::new("Required", "required"),
];

#[derive(Debug, Subcommand)]
pub enum FieldsCommand {
    /// List ticket fields
    List {
        /// Extra query parameters (key=value)
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
    /// Show one ticket field
    Get {
        /// Ticket field id
        id: String,
    },
    /// Create a ticket field
    Create {
        /// Field attributes (key=value, values parsed as JSON when possible)
        #[arg(long = "field", value_name = "KEY=VALUE", required = true)]
        fields: Vec<String>,
    },
    /// Update a ticket field
    Update {
        /// Ticket field id
        id: String,
        /// Attributes to change (key=value)
        #[arg(long = "field", value_name = "KEY=VALUE", required = true)]
        fields: Vec<String>,
    },
    /// Delete a ticket field
    Delete {
        /// Ticket field id
        id: String,
    },
}

pub async fn run(client: &HelpdeskClient, command: FieldsCommand, format: OutputFormat) -> Result<()> {
    let descriptor = TicketFields::<HttpTransport>::descriptor();
    let mut fields = client.ticket_fields();

    let output = match command {
        FieldsCommand::List { params } => {
            info!("Listing ticket fields");
            let params = parse_assignments(&params)?;
            let response = fields.find_all(&params).await?;
            format_list(format, response.as_ref(), descriptor.object_name_plural, COLUMNS)?
        }
        FieldsCommand::Get { id } => {
            info!(id = %id, "Fetching ticket field");
            let response = fields.find(Some(parse_identifier(&id))).await?;
            format_record(format, response.as_ref(), descriptor.object_name)?
        }
        FieldsCommand::Create { fields: assignments } => {
            info!("Creating ticket field");
            let response = fields.create(parse_assignments(&assignments)?).await?;
            format_record(format, response.as_ref(), descriptor.object_name)?
        }
        FieldsCommand::Update {
            id,
            fields: assignments,
        } => {
            info!(id = %id, "Updating ticket field");
            let response = fields
                .update(Some(parse_identifier(&id)), parse_assignments(&assignments)?)
                .await?;
            format_record(format, response.as_ref(), descriptor.object_name)?
        }
        FieldsCommand::Delete { id } => {
            info!(id = %id, "Deleting ticket field");
            let response = fields.delete(Some(parse_identifier(&id))).await?;
            format_deleted(format, response.as_ref(), "ticket field", &id)?
        }
    };

    println!("{output}");
    Ok(())
}
