//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every session
//! operation. Debug builds assert them after each mutation; tests check
//! them directly.

use crate::{GameSession, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the displayed step names a recorded history entry.
pub struct StepInRange;

impl Invariant<GameSession> for StepInRange {
    fn holds(session: &GameSession) -> bool {
        session.current_step() < session.history().len()
    }

    fn description() -> &'static str {
        "Current step lies within the history"
    }
}

/// Invariant: each entry adds exactly one mark, at its recorded square.
///
/// The history opens with an empty board and no recorded square; every
/// later entry differs from its predecessor in one previously empty
/// square, and that square is the one the entry records.
pub struct HistoryConsistent;

impl Invariant<GameSession> for HistoryConsistent {
    fn holds(session: &GameSession) -> bool {
        let moves = session.history().moves();
        let Some(first) = moves.first() else {
            return false;
        };
        if first.last_move().is_some() || first.board().occupied_count() != 0 {
            return false;
        }

        moves.windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match after.last_move() {
                Some(pos) => {
                    before.board().diff(after.board()) == vec![pos]
                        && before.board().get(pos) == Square::Empty
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark at its recorded square"
    }
}

/// Invariant: X opens and marks alternate strictly.
///
/// The mark placed at step `k` belongs to the player whose turn it was
/// after `k - 1` moves, and the player to move matches the displayed
/// step's parity.
pub struct AlternatingTurn;

impl Invariant<GameSession> for AlternatingTurn {
    fn holds(session: &GameSession) -> bool {
        let marks_alternate = session
            .history()
            .moves()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, mv)| mv.mark() == Some(Player::for_step(step - 1)));

        marks_alternate && session.next_player() == Player::for_step(session.current_step())
    }

    fn description() -> &'static str {
        "Marks alternate starting with X and the next player matches the step"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (StepInRange, HistoryConsistent, AlternatingTurn);

/// Asserts the session invariants in debug builds.
pub(crate) fn assert_invariants(session: &GameSession) {
    if cfg!(debug_assertions)
        && let Err(violations) = SessionInvariants::check_all(session)
    {
        panic!("Session invariants violated: {:?}", violations);
    }
}
