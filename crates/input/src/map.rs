//! Key mapping from terminal events to player actions.

use crate::types::PlayerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keyboard event to a player action.
///
/// Arrow keys, `a`/`d`, and `h`/`l` move the paddle; Enter restarts; Esc,
/// `q`, and Ctrl+C quit.
pub fn map_key(key: KeyEvent) -> Option<PlayerAction> {
    if is_ctrl_c(&key) {
        return Some(PlayerAction::Quit);
    }

    match key.code {
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(PlayerAction::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(PlayerAction::MoveRight),

        KeyCode::Enter => Some(PlayerAction::Restart),

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(PlayerAction::Quit),

        _ => None,
    }
}

/// Whether an event of this kind should be applied.
///
/// Presses and auto-repeats each move the paddle once; releases are ignored.
pub fn is_actionable(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
