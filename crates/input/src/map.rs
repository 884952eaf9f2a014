//! Key mapping from terminal events to menu actions.

use crate::types::MenuAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to menu actions.
///
/// Quit keys are reported by [`should_quit`] instead, so callers can restore the terminal
/// before leaving.
pub fn handle_key_event(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Char('1') | KeyCode::Char('p') | KeyCode::Char('P') => Some(MenuAction::Play),
        KeyCode::Char('2') | KeyCode::Char('r') | KeyCode::Char('R') => Some(MenuAction::Reserve),
        KeyCode::Char('3') | KeyCode::Char('u') | KeyCode::Char('U') => {
            Some(MenuAction::UseReserved)
        }
        KeyCode::Char('4') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(MenuAction::SwapFrontTop)
        }
        KeyCode::Char('5') | KeyCode::Char('b') | KeyCode::Char('B') => {
            Some(MenuAction::SwapBatch)
        }
        _ => None,
    }
}

/// Check if key should quit the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('0') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
