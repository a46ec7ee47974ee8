//! Inbound intents from the presentation layer.

use crate::error::IntentParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user request forwarded to [`GameSession::dispatch`](crate::GameSession::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Play the next mark on square 0-8.
    Play(usize),
    /// Display the board as it stood at this step.
    JumpTo(usize),
    /// Flip the move list order.
    ToggleOrder,
}

/// Parses the compact script syntax: `0`-`8` plays a square, `@N` jumps
/// to step `N`, `s` or `sort` toggles the move list order.
impl FromStr for Intent {
    type Err = IntentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("s") || token.eq_ignore_ascii_case("sort") {
            return Ok(Intent::ToggleOrder);
        }

        if let Some(step) = token.strip_prefix('@') {
            return step
                .parse()
                .map(Intent::JumpTo)
                .map_err(|_| IntentParseError::new(s, "expected a step number after '@'"));
        }

        match token.parse::<usize>() {
            Ok(index) if index < 9 => Ok(Intent::Play(index)),
            Ok(_) => Err(IntentParseError::new(s, "square index must be 0-8")),
            Err(_) => Err(IntentParseError::new(
                s,
                "expected a square 0-8, @STEP, or 's'",
            )),
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Play(index) => write!(f, "{}", index),
            Intent::JumpTo(step) => write!(f, "@{}", step),
            Intent::ToggleOrder => f.write_str("s"),
        }
    }
}
