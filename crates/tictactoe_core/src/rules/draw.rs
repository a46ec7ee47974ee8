//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|sq| *sq != Square::Empty)
}

/// Checks if the game is a draw (board full, no winner).
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
