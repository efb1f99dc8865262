//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the API client from the loaded configuration.
//! - Route parsed CLI arguments to the appropriate command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::{Context, Result};
use helpdesk_client::HelpdeskClient;
use helpdesk_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;

    let client = HelpdeskClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to build helpdesk client")?;

    match cli.command {
        Commands::Fields { command } => {
            commands::fields::run(&client, command, format).await?;
        }
        Commands::Options { field_id, command } => {
            commands::options::run(&client, field_id, command, format).await?;
        }
    }

    Ok(())
}
