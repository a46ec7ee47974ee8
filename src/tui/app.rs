//! Application state and key handling for the terminal UI.

use super::input::{digit_to_index, move_cursor};
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use tictactoe_core::{GameSession, Intent, Position, Snapshot};
use tracing::{debug, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// Holds the game session plus purely visual state (cursor, focus, list
/// selection). The session is only changed through [`Intent`]s.
#[derive(Debug, Getters)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    /// Step highlighted in the move list; a step, not a row, so it
    /// survives reordering.
    selected_step: usize,
}

impl App {
    /// Creates a new application at the game start.
    #[instrument]
    pub fn new(ascending: bool) -> Self {
        let mut session = GameSession::new();
        if !ascending {
            session.toggle_sort_order();
        }
        Self {
            session,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
        }
    }

    /// Snapshot of the session for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Row of the selected step within the displayed move list.
    pub fn selected_row(&self) -> usize {
        let len = self.session.history().len();
        if self.session.ascending() {
            self.selected_step
        } else {
            len - 1 - self.selected_step
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => self.send(Intent::ToggleOrder),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(index) = digit_to_index(c) {
                    self.cursor = Position::ALL[index];
                    self.send(Intent::Play(index));
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.send(Intent::Play(self.cursor.index())),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last_row = self.session.history().len() - 1;
        let row = self.selected_row();
        let row = match code {
            KeyCode::Up => row.saturating_sub(1),
            KeyCode::Down => (row + 1).min(last_row),
            KeyCode::Enter => {
                self.send(Intent::JumpTo(self.selected_step));
                return;
            }
            _ => return,
        };
        self.selected_step = if self.session.ascending() {
            row
        } else {
            last_row - row
        };
    }

    /// Forwards an intent to the session and follows the displayed step.
    fn send(&mut self, intent: Intent) {
        debug!(%intent, "Forwarding intent");
        self.session.dispatch(intent);
        if !matches!(intent, Intent::ToggleOrder) {
            self.selected_step = self.session.current_step();
        }
    }
}
