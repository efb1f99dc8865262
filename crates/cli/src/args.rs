//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build the configuration (see `main()`).

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "helpdesk-cli")]
#[command(about = "Helpdesk CLI - Manage ticket fields and their options from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  helpdesk-cli fields list\n  helpdesk-cli fields get 42\n  helpdesk-cli options --field-id 42 list\n  helpdesk-cli options --field-id 42 create --field name=Urgent --field value=priority_urgent\n  helpdesk-cli options --field-id 42 update 10003 --field name='Very high'\n  helpdesk-cli -o json options --field-id 42 delete 10003\n"
)]
pub struct Cli {
    /// API base URL (e.g., https://acme.zendesk.com/api/v2)
    #[arg(short, long, global = true, env = "HELPDESK_BASE_URL")]
    pub base_url: Option<String>,

    /// Account subdomain; derives the base URL when --base-url is not given
    #[arg(short, long, global = true, env = "HELPDESK_SUBDOMAIN")]
    pub subdomain: Option<String>,

    /// Agent email for API token or password authentication
    #[arg(short, long, global = true, env = "HELPDESK_EMAIL")]
    pub email: Option<String>,

    /// API token (used with --email)
    #[arg(short = 't', long, global = true, env = "HELPDESK_API_TOKEN")]
    pub api_token: Option<String>,

    /// Password (used with --email)
    #[arg(short, long, global = true, env = "HELPDESK_PASSWORD")]
    pub password: Option<String>,

    /// OAuth access token (preferred over API token and password)
    #[arg(long, global = true, env = "HELPDESK_OAUTH_TOKEN")]
    pub oauth_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "HELPDESK_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification
    #[arg(long, global = true, env = "HELPDESK_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Output format (json, table)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List and manage ticket fields
    Fields {
        #[command(subcommand)]
        command: commands::fields::FieldsCommand,
    },

    /// List and manage the options of a drop-down or multi-select ticket field
    Options {
        /// Parent ticket field id
        #[arg(short, long)]
        field_id: Option<String>,

        #[command(subcommand)]
        command: commands::options::OptionsCommand,
    },
}
