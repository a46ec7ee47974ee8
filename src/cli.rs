//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::Intent;

/// Tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a script of intents to a new game and print the result
    ///
    /// Intents: `0`-`8` plays that square, `@N` jumps to step N,
    /// `s` toggles the move list order.
    Replay {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Intents to apply, in order
        intents: Vec<Intent>,
    },
}

/// How `replay` prints the final snapshot.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Board, status and move list as plain text
    #[default]
    Text,
    /// The snapshot as pretty-printed JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay_intents() {
        let cli = Cli::parse_from(["tictactoe", "replay", "0", "4", "@1", "s"]);
        match cli.command {
            Command::Replay { format, intents } => {
                assert_eq!(format, OutputFormat::Text);
                assert_eq!(
                    intents,
                    vec![
                        Intent::Play(0),
                        Intent::Play(4),
                        Intent::JumpTo(1),
                        Intent::ToggleOrder
                    ]
                );
            }
            Command::Play => panic!("expected replay"),
        }
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
    }

    #[test]
    fn test_rejects_bad_intent() {
        assert!(Cli::try_parse_from(["tictactoe", "replay", "9"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["tictactoe", "play", "--config", "custom.toml"]);
        assert!(matches!(cli.command, Command::Play));
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }
}
