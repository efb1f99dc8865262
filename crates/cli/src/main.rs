//! Helpdesk CLI - Command-line interface for helpdesk ticket fields and options.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute helpdesk REST API commands via the shared client library.
//! - Format and display results as tables or JSON.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use helpdesk_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Layer CLI flags over environment values and build the configuration.
fn load_config(cli: &Cli) -> Result<Config, helpdesk_config::ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref subdomain) = cli.subdomain {
        loader = loader.with_subdomain(subdomain.clone());
    }
    if let Some(ref email) = cli.email {
        loader = loader.with_email(email.clone());
    }
    if let Some(ref token) = cli.api_token {
        loader = loader.with_api_token(token.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(ref token) = cli.oauth_token {
        loader = loader.with_oauth_token(token.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    loader.build()
}

fn init_tracing(json: bool) {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    tracing::info!(base_url = %config.connection.base_url, auth = config.auth.strategy.kind(), "Starting helpdesk-cli");

    let exit_code = match run_command(cli, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
