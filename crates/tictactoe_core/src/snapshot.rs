//! Read-only view of a session for the presentation layer.

use crate::{Board, Line, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

/// History length once all nine squares have been played.
pub const FULL_HISTORY_LEN: usize = 10;

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// The displayed board has three in a row.
    Winner(Player),
    /// Every square was played without a winner.
    Draw,
    /// The game continues with this player.
    NextPlayer(Player),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {}", player),
            Status::Draw => f.write_str("Draw"),
            Status::NextPlayer(player) => write!(f, "Next player: {}", player),
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct MoveEntry {
    /// Step this entry jumps to; unaffected by display order.
    step: usize,
    /// Label such as `Go to move #2 (col:1, row:3)`.
    description: String,
    /// Whether this entry is the step currently displayed.
    current: bool,
}

/// Everything needed to draw the game at the current step.
///
/// Snapshots are rebuilt on every call to
/// [`GameSession::snapshot`](crate::GameSession::snapshot) and are never
/// cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Snapshot {
    board: Board,
    winner: Option<Line>,
    status: Status,
    moves: Vec<MoveEntry>,
    ascending: bool,
    current_step: usize,
}

impl Snapshot {
    pub(crate) fn new(
        board: Board,
        winner: Option<Line>,
        status: Status,
        moves: Vec<MoveEntry>,
        ascending: bool,
        current_step: usize,
    ) -> Self {
        Self {
            board,
            winner,
            status,
            moves,
            ascending,
            current_step,
        }
    }

    /// Status text as shown to the player.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Move list labels in display order.
    pub fn descriptions(&self) -> Vec<&str> {
        self.moves.iter().map(|m| m.description.as_str()).collect()
    }

    /// Position of the current step within the displayed move list.
    pub fn current_row(&self) -> Option<usize> {
        self.moves.iter().position(|m| m.current)
    }
}
