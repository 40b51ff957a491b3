//! Main entry point for godex.
//!
//! Resolves the history file, runs the requested view, and prints the result
//! on stdout. Errors are reported on stderr with a non-zero exit.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use godex::ai::{generate_insights, AiClient};
use godex::config::{Cli, Commands};
use godex::history::{daily_entries, latest_commands};
use godex::report;
use godex::utils;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging before anything else
    let _log_guard = utils::logger::init_logging();

    let cli = Cli::parse();
    let path = cli.locator().locate().context("locate history file")?;
    tracing::debug!("Using history file {}", path.display());

    let output = match cli.command() {
        Commands::Locate => format!("{}\n", path.display()),
        Commands::Recent { count } => {
            let commands = latest_commands(&path, count).context("collect recent commands")?;
            report::render_commands(&commands, cli.json)?
        }
        Commands::Today => {
            let entries = daily_entries(&path, Local::now().date_naive(), &Local)
                .context("collect today's commands")?;
            report::render_entries(&entries, cli.json)?
        }
        Commands::Day { date } => {
            let entries = daily_entries(&path, date, &Local)
                .with_context(|| format!("collect commands for {}", date))?;
            report::render_entries(&entries, cli.json)?
        }
        Commands::Summary => {
            let entries = daily_entries(&path, Local::now().date_naive(), &Local)
                .context("collect today's commands")?;
            let client = AiClient::new(&cli.model);
            match generate_insights(&client, &entries).await? {
                Some(insights) => report::render_insights(&insights, cli.json)?,
                None => {
                    tracing::info!("Nothing to summarize for today");
                    String::new()
                }
            }
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("write output")?;
    if cli.json && !output.is_empty() {
        writeln!(stdout).context("write output")?;
    }
    stdout.flush().context("write output")?;
    Ok(())
}
