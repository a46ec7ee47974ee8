//! Tic-tac-toe - command-line entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe::cli::{Cli, Command, OutputFormat};
use tictactoe::{AppConfig, logging, replay, tui};
use tictactoe_core::Intent;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { format, intents } => run_replay(&config, format, &intents),
    }
}

/// Run the interactive terminal UI
fn run_play(config: &AppConfig) -> Result<()> {
    logging::init_file_logging(config.logging())?;
    tui::run_tui(*config.display().ascending())
}

/// Apply a script of intents and print the final snapshot
#[instrument(skip(config, intents))]
fn run_replay(config: &AppConfig, format: OutputFormat, intents: &[Intent]) -> Result<()> {
    logging::init_stderr_logging(config.logging());
    info!(count = intents.len(), "Replaying intents");

    let session = replay::run_intents(*config.display().ascending(), intents);
    print!("{}", replay::render(&session.snapshot(), format)?);
    Ok(())
}
