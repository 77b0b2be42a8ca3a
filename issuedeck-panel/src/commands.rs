//! Command handlers

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use issuedeck_client::{IssueClient, IssueSource};
use issuedeck_panel::{Config, Presentation, input, view};
use tokio::sync::mpsc;

/// Panel commands
#[derive(Subcommand)]
pub enum Commands {
    /// Interactive panel: Enter fetches, q quits
    Panel,
    /// Fetch once and print the result
    Fetch,
}

/// Handle a CLI command
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let client =
        IssueClient::new(&config.issues_url).context("Failed to initialize HTTP client")?;
    let source: Arc<dyn IssueSource> = Arc::new(client);

    match command {
        Commands::Panel => run_panel(source).await,
        Commands::Fetch => fetch_once(source).await,
    }
}

/// Run one fetch cycle and print the display text
///
/// Fetch failures are display text like any other outcome, so they do not
/// change the exit status.
async fn fetch_once(source: Arc<dyn IssueSource>) -> Result<()> {
    let mut presentation = Presentation::new(source);
    let state = presentation.run_cycle().await;

    print!("{}", state.display_text);
    if !state.display_text.ends_with('\n') {
        println!();
    }

    Ok(())
}

/// Run the interactive panel until the user quits
async fn run_panel(source: Arc<dyn IssueSource>) -> Result<()> {
    println!(
        "{}",
        format!("Issue source: {}", source.location()).dimmed()
    );
    println!("{}", "Press Enter to fetch, q to quit.".dimmed());
    println!();

    let presentation = Presentation::new(source);
    let view = tokio::spawn(view::run_view(presentation.subscribe()));

    let (events_tx, events_rx) = mpsc::channel(16);
    let reader = input::spawn_stdin_reader(events_tx);

    presentation.run(events_rx).await;

    view.await.context("View task failed")?;
    reader
        .join()
        .map_err(|_| anyhow::anyhow!("Input thread panicked"))?;

    Ok(())
}
