//! Immutable move snapshots and the history that holds them.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One point in time: the board after a move, and where that move landed.
///
/// Moves are never edited once created. The opening entry of every
/// history has an empty board and no `last_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    board: Board,
    last_move: Option<Position>,
}

impl Move {
    /// The empty board that opens every game.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Returns the move reached by `player` marking `pos` on this board.
    #[must_use]
    pub fn then(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with(pos, Square::Occupied(player)),
            last_move: Some(pos),
        }
    }

    /// Board as it stood after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Square filled to reach this board; `None` for the game start.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Mark placed by this move, read back from the board.
    pub fn mark(&self) -> Option<Player> {
        self.last_move.and_then(|pos| self.board.get(pos).player())
    }

    /// Label shown in the move list for the entry at `step`.
    pub fn describe(&self, step: usize) -> String {
        match self.last_move {
            Some(pos) if step > 0 => format!(
                "Go to move #{} (col:{}, row:{})",
                step,
                pos.column(),
                pos.row()
            ),
            _ => "Go to game start".to_string(),
        }
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::start()
    }
}

/// Chronological list of moves, always starting with [`Move::start`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    moves: Vec<Move>,
}

impl History {
    /// Creates a history holding only the game start.
    pub fn new() -> Self {
        Self {
            moves: vec![Move::start()],
        }
    }

    /// Number of entries, game start included. Never zero.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false: the game start entry cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Entry at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&Move> {
        self.moves.get(step)
    }

    /// Most recent entry.
    pub fn latest(&self) -> &Move {
        // `moves` always holds the game start.
        &self.moves[self.moves.len() - 1]
    }

    /// All entries in chronological order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Drops every entry after `step`.
    #[instrument(skip(self), fields(len = self.moves.len()))]
    pub(crate) fn truncate_after(&mut self, step: usize) {
        self.moves.truncate(step + 1);
    }

    /// Appends a new entry and returns its step.
    pub(crate) fn push(&mut self, mv: Move) -> usize {
        self.moves.push(mv);
        self.moves.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
