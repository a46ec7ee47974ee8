//! Reasons a session operation was turned down.
//!
//! The session treats every rejection as a no-op; these types exist so
//! callers that care (tests, scripted replays, logs) can see why.

use crate::Position;
use derive_more::{Display, Error};

/// Error that can occur when validating a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index does not name a square on the board.
    #[display("Square index {} is off the board", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The displayed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),
}

/// Error that can occur when jumping through the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum JumpError {
    /// The requested step was never recorded.
    #[display("Step {} is out of range (history holds {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Error parsing an [`Intent`](crate::Intent) from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognised intent {:?}: {}", input, reason)]
pub struct IntentParseError {
    /// The text that failed to parse.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl IntentParseError {
    /// Creates a new parse error.
    pub fn new(input: impl Into<String>, reason: &'static str) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }
}
