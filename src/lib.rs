//! Tic-tac-toe with a time-travel move history.
//!
//! The game rules and session live in [`tictactoe_core`]; this crate adds
//! the front ends that drive them.
//!
//! # Architecture
//!
//! - **CLI**: `play` and `replay` subcommands ([`cli`])
//! - **Config**: TOML settings for display order and logging ([`config`])
//! - **Replay**: applies a script of intents and prints the snapshot
//! - **TUI**: interactive board and move list built on ratatui
//!
//! # Example
//!
//! ```
//! use tictactoe::replay::{run_intents, render_text};
//! use tictactoe_core::Intent;
//!
//! let session = run_intents(true, &[Intent::Play(4), Intent::Play(0)]);
//! let text = render_text(&session.snapshot());
//! assert!(text.starts_with("Next player: X"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use config::{AppConfig, ConfigError, DisplayConfig, LoggingConfig};
