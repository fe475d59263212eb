//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, SessionStatus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game action for the current session state.
///
/// After game over the same keys mean different things: Space (or Enter, R)
/// restarts and Esc quits.
pub fn handle_key_event(key: KeyEvent, status: SessionStatus) -> Option<GameAction> {
    if status == SessionStatus::GameOver {
        return match key.code {
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
                Some(GameAction::Restart)
            }
            KeyCode::Esc => Some(GameAction::Quit),
            _ => None,
        };
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),

        _ => None,
    }
}

/// Check if key should quit the game regardless of state.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
