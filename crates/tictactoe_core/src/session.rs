//! The game session: move history, time travel and display order.
//!
//! A [`GameSession`] is changed only through three operations:
//! [`apply_move`](GameSession::apply_move), [`jump_to`](GameSession::jump_to)
//! and [`toggle_sort_order`](GameSession::toggle_sort_order). Everything the
//! presentation layer draws comes from [`GameSession::snapshot`], which is
//! recomputed from the history on every call.

use crate::error::{JumpError, MoveError};
use crate::history::History;
use crate::invariants::assert_invariants;
use crate::rules::winning_line;
use crate::snapshot::{FULL_HISTORY_LEN, MoveEntry, Snapshot, Status};
use crate::{Board, Intent, Player, Position};
use tracing::{debug, instrument, warn};

/// Session state for one running game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) history: History,
    pub(crate) current_step: usize,
    next_player: Player,
    ascending: bool,
}

impl GameSession {
    /// Creates a session at the game start with X to move and the move
    /// list in chronological order.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            next_player: Player::X,
            ascending: true,
        }
    }

    /// Recorded history, including entries after the displayed step.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Step currently displayed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Player whose mark the next move places.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Whether the move list is shown oldest first.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Board at the displayed step.
    pub fn board(&self) -> &Board {
        self.history
            .get(self.current_step)
            .unwrap_or_else(|| self.history.latest())
            .board()
    }

    /// Plays the next player's mark at `index` (0-8), ignoring illegal moves.
    ///
    /// Moves onto an occupied square, onto a board that already has a
    /// winner, or off the board leave the session unchanged.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player))]
    pub fn apply_move(&mut self, index: usize) {
        if let Err(e) = self.try_apply_move(index) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Plays the next player's mark at `index`, reporting why a move was
    /// refused.
    ///
    /// Any entries after the displayed step are discarded before the new
    /// move is appended.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not 0-8.
    /// - [`MoveError::GameOver`] if the displayed board has a winner.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<Position, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let current = *self
            .history
            .get(self.current_step)
            .unwrap_or_else(|| self.history.latest());

        if winning_line(current.board()).is_some() {
            return Err(MoveError::GameOver);
        }
        if !current.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let discarded = self.history.len() - 1 - self.current_step;
        if discarded > 0 {
            debug!(discarded, "Discarding moves after the displayed step");
        }
        self.history.truncate_after(self.current_step);
        self.current_step = self.history.push(current.then(pos, self.next_player));
        self.next_player = self.next_player.opponent();

        debug!(
            position = %pos,
            history_len = self.history.len(),
            "Move applied"
        );
        assert_invariants(self);
        Ok(pos)
    }

    /// Displays the board as it stood at `step`, ignoring unknown steps.
    ///
    /// History is left intact; only a later move discards the entries
    /// after `step`.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if let Err(e) = self.try_jump_to(step) {
            warn!(error = %e, "Jump ignored");
        }
    }

    /// Displays the board as it stood at `step`.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::StepOutOfRange`] if `step` was never recorded.
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        let len = self.history.len();
        if step >= len {
            return Err(JumpError::StepOutOfRange { step, len });
        }

        self.current_step = step;
        self.next_player = Player::for_step(step);
        debug!(next_player = %self.next_player, "Jumped");
        assert_invariants(self);
        Ok(())
    }

    /// Flips the move list between oldest-first and newest-first.
    #[instrument(skip(self), fields(ascending = self.ascending))]
    pub fn toggle_sort_order(&mut self) {
        self.ascending = !self.ascending;
    }

    /// Routes an inbound intent to the matching operation.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::Play(index) => self.apply_move(index),
            Intent::JumpTo(step) => self.jump_to(step),
            Intent::ToggleOrder => self.toggle_sort_order(),
        }
    }

    /// Status for the displayed step.
    ///
    /// A full history reports a draw whichever step is displayed, as
    /// long as the displayed board has no winner.
    pub fn status(&self) -> Status {
        let board = self.board();
        match winning_line(board).and_then(|line| board.get(line.first()).player()) {
            Some(player) => Status::Winner(player),
            None if self.history.len() == FULL_HISTORY_LEN => Status::Draw,
            None => Status::NextPlayer(self.next_player),
        }
    }

    /// Builds a fresh read-only view of the displayed step.
    #[instrument(level = "trace", skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        let board = *self.board();
        let mut moves: Vec<MoveEntry> = self
            .history
            .moves()
            .iter()
            .enumerate()
            .map(|(step, mv)| MoveEntry::new(step, mv.describe(step), step == self.current_step))
            .collect();
        if !self.ascending {
            moves.reverse();
        }

        Snapshot::new(
            board,
            winning_line(&board),
            self.status(),
            moves,
            self.ascending,
            self.current_step,
        )
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(indices: &[usize]) -> GameSession {
        let mut session = GameSession::new();
        for &index in indices {
            session
                .try_apply_move(index)
                .unwrap_or_else(|e| panic!("move {} rejected: {}", index, e));
        }
        session
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current_step(), 0);
        assert_eq!(session.next_player(), Player::X);
        assert!(session.ascending());
        assert_eq!(session.status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_move_places_mark_and_flips_player() {
        let session = play(&[4]);
        assert_eq!(session.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(session.current_step(), 1);
        assert_eq!(session.next_player(), Player::O);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut session = play(&[4]);
        let before = session.clone();

        assert_eq!(
            session.try_apply_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        session.apply_move(4);
        assert_eq!(session, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut session = GameSession::new();
        assert_eq!(session.try_apply_move(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_win_blocks_further_moves() {
        let mut session = play(&[0, 4, 1, 3, 2]);
        let before = session.clone();

        assert_eq!(session.try_apply_move(8), Err(MoveError::GameOver));
        assert_eq!(session, before);
        assert_eq!(session.status(), Status::Winner(Player::X));
    }

    #[test]
    fn test_jump_back_then_move_truncates() {
        let mut session = play(&[0, 4, 8]);
        session.jump_to(1);
        assert_eq!(session.history().len(), 4);
        assert_eq!(session.next_player(), Player::O);

        session.apply_move(5);
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.current_step(), 2);
        assert_eq!(session.board().get(Position::MiddleRight), Square::Occupied(Player::O));
        assert!(session.board().is_empty(Position::Center));
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut session = play(&[0, 4]);
        assert_eq!(
            session.try_jump_to(3),
            Err(JumpError::StepOutOfRange { step: 3, len: 3 })
        );
        session.jump_to(7);
        assert_eq!(session.current_step(), 2);
    }

    #[test]
    fn test_jump_out_of_won_position_reopens_play() {
        let mut session = play(&[0, 4, 1, 3, 2]);
        session.jump_to(4);
        assert_eq!(session.status(), Status::NextPlayer(Player::X));
        assert_eq!(session.try_apply_move(8), Ok(Position::BottomRight));
        assert_eq!(session.history().len(), 6);
    }

    #[test]
    fn test_dispatch_routes_intents() {
        let mut session = GameSession::new();
        session.dispatch(Intent::Play(0));
        session.dispatch(Intent::Play(1));
        session.dispatch(Intent::JumpTo(1));
        session.dispatch(Intent::ToggleOrder);

        assert_eq!(session.current_step(), 1);
        assert_eq!(session.history().len(), 3);
        assert!(!session.ascending());
    }

    #[test]
    fn test_snapshot_marks_current_entry() {
        let mut session = play(&[0, 4, 8]);
        session.jump_to(1);
        let snapshot = session.snapshot();

        assert_eq!(snapshot.current_row(), Some(1));
        assert_eq!(*snapshot.current_step(), 1);
        assert_eq!(snapshot.status_text(), "Next player: O");
    }

    #[test]
    fn test_descending_snapshot_keeps_steps() {
        let mut session = play(&[0, 4]);
        session.toggle_sort_order();
        let snapshot = session.snapshot();

        let steps: Vec<usize> = snapshot.moves().iter().map(|m| *m.step()).collect();
        assert_eq!(steps, vec![2, 1, 0]);
        assert_eq!(snapshot.descriptions()[2], "Go to game start");
        assert!(!*snapshot.ascending());
    }
}
