//! Tic-tac-toe game logic with a time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw detection over a [`Board`]
//! - **History**: immutable [`Move`] snapshots, one per turn
//! - **Session**: [`GameSession`] owns the history and exposes three
//!   operations (play, jump, toggle order) plus a read-only [`Snapshot`]
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, Status, Player};
//!
//! let mut session = GameSession::new();
//! for index in [0, 4, 1, 3, 2] {
//!     session.apply_move(index);
//! }
//!
//! let snapshot = session.snapshot();
//! assert_eq!(*snapshot.status(), Status::Winner(Player::X));
//! assert_eq!(snapshot.winner().map(|line| line.indices()), Some([0, 1, 2]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
mod intent;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod types;

#[cfg(test)]
mod proptests;

pub use error::{IntentParseError, JumpError, MoveError};
pub use history::{History, Move};
pub use intent::Intent;
pub use position::Position;
pub use rules::{Line, check_winner, winning_line};
pub use session::GameSession;
pub use snapshot::{FULL_HISTORY_LEN, MoveEntry, Snapshot, Status};
pub use types::{Board, Player, Square};
