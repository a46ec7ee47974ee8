//! Scripted front end: apply intents to a new game and print the result.

use crate::cli::OutputFormat;
use anyhow::Result;
use std::fmt::Write;
use tictactoe_core::{GameSession, Intent, Snapshot};
use tracing::{debug, info, instrument};

/// Applies `intents` in order to a session that starts with the given
/// move list order.
#[instrument(skip(intents), fields(count = intents.len()))]
pub fn run_intents(ascending: bool, intents: &[Intent]) -> GameSession {
    let mut session = GameSession::new();
    if !ascending {
        session.toggle_sort_order();
    }

    for intent in intents {
        debug!(%intent, "Applying intent");
        session.dispatch(*intent);
    }

    info!(
        history_len = session.history().len(),
        current_step = session.current_step(),
        "Replay finished"
    );
    session
}

/// Renders a snapshot in the requested format.
pub fn render(snapshot: &Snapshot, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(snapshot)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(snapshot)? + "\n"),
    }
}

/// Plain-text rendering: status, board, winning line and move list.
///
/// The displayed step is marked with `>`.
pub fn render_text(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", snapshot.status());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", snapshot.board());
    if let Some(line) = snapshot.winner() {
        let [a, b, c] = line.indices();
        let _ = writeln!(out);
        let _ = writeln!(out, "Winning line: {}, {}, {}", a, b, c);
    }
    let _ = writeln!(out);
    let order = if *snapshot.ascending() { "Asc" } else { "Desc" };
    let _ = writeln!(out, "Moves ({}):", order);
    for entry in snapshot.moves() {
        let marker = if *entry.current() { '>' } else { ' ' };
        let _ = writeln!(out, "{} {}. {}", marker, entry.step(), entry.description());
    }
    out
}
