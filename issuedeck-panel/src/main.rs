//! Issuedeck panel
//!
//! Terminal front end for the issue list: a fetch button and a display area.

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, handle_command};
use issuedeck_client::DEFAULT_ISSUES_URL;
use issuedeck_panel::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "issuedeck")]
#[command(about = "Fetch and display the issue list", long_about = None)]
struct Cli {
    /// Issue list URL
    #[arg(long, env = "ISSUEDECK_ISSUES_URL", default_value = DEFAULT_ISSUES_URL)]
    url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout belongs to the panel
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "issuedeck_panel=info,issuedeck_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.url);
    config.validate().context("Invalid configuration")?;

    handle_command(cli.command.unwrap_or(Commands::Panel), &config).await
}
