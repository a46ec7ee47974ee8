//! Property-based tests for win detection and the session operations.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::rules::LINES;
use crate::{Board, GameSession, Intent, MoveError, Player, Position, Square, winning_line};
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(arb_square()).prop_map(|squares| {
        Position::ALL
            .into_iter()
            .zip(squares)
            .fold(Board::new(), |board, (pos, sq)| board.with(pos, sq))
    })
}

fn arb_intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        6 => (0usize..9).prop_map(Intent::Play),
        2 => (0usize..10).prop_map(Intent::JumpTo),
        1 => Just(Intent::ToggleOrder),
    ]
}

fn arb_session() -> impl Strategy<Value = GameSession> {
    prop::collection::vec(arb_intent(), 0..30).prop_map(|intents| {
        let mut session = GameSession::new();
        for intent in intents {
            session.dispatch(intent);
        }
        session
    })
}

fn line_is_uniform(board: &Board, positions: [Position; 3]) -> bool {
    let [a, b, c] = positions;
    board.get(a) != Square::Empty && board.get(a) == board.get(b) && board.get(b) == board.get(c)
}

// ============================================================================
// Win Detection Properties
// ============================================================================

proptest! {
    #[test]
    fn winner_found_iff_some_line_is_uniform(board in arb_board()) {
        let any_uniform = LINES.iter().any(|line| line_is_uniform(&board, line.positions()));
        prop_assert_eq!(winning_line(&board).is_some(), any_uniform);
    }

    #[test]
    fn reported_line_is_first_uniform_line(board in arb_board()) {
        if let Some(line) = winning_line(&board) {
            prop_assert!(line_is_uniform(&board, line.positions()));
            let first = LINES
                .iter()
                .position(|l| line_is_uniform(&board, l.positions()));
            prop_assert_eq!(first.map(|i| LINES[i]), Some(line));
        }
    }
}

// ============================================================================
// Session Properties
// ============================================================================

proptest! {
    #[test]
    fn invariants_hold_after_any_intents(session in arb_session()) {
        prop_assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn legal_move_from_latest_adds_one_entry(session in arb_session(), index in 0usize..9) {
        let mut session = session;
        let latest = session.history().len() - 1;
        session.jump_to(latest);
        let before = session.clone();

        match session.try_apply_move(index) {
            Ok(pos) => {
                prop_assert_eq!(session.history().len(), before.history().len() + 1);
                prop_assert_eq!(before.board().diff(session.board()), vec![pos]);
                prop_assert_eq!(
                    session.board().get(pos),
                    Square::Occupied(before.next_player())
                );
            }
            Err(MoveError::GameOver | MoveError::SquareOccupied(_)) => {
                prop_assert_eq!(&session, &before);
            }
            Err(MoveError::OutOfBounds(_)) => prop_assert!(false, "index {} is on the board", index),
        }
    }

    #[test]
    fn rejected_move_changes_nothing(session in arb_session(), index in 0usize..12) {
        let mut session = session;
        let before = session.clone();
        if session.try_apply_move(index).is_err() {
            prop_assert_eq!(&session, &before);
        }
    }

    #[test]
    fn jump_shows_recorded_board(session in arb_session(), step in 0usize..10) {
        let mut session = session;
        let len = session.history().len();
        let step = step % len;

        session.jump_to(step);
        let expected = *session.history().moves()[step].board();
        let snapshot = session.snapshot();
        prop_assert_eq!(*snapshot.board(), expected);
        prop_assert_eq!(session.history().len(), len);
        prop_assert_eq!(session.next_player(), Player::for_step(step));
    }

    #[test]
    fn toggling_twice_restores_order(session in arb_session()) {
        let mut session = session;
        let original = session.snapshot();
        session.toggle_sort_order();
        session.toggle_sort_order();
        prop_assert_eq!(session.snapshot(), original);
    }

    #[test]
    fn reversed_list_keeps_each_entry_step(session in arb_session()) {
        let mut session = session;
        let forward = session.snapshot().moves().clone();
        session.toggle_sort_order();
        let mut backward = session.snapshot().moves().clone();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }
}
