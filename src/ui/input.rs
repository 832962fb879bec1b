//! Key event mapping (Input -> Action)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, Focus};
use crate::models::RecordKind;

/// Maps a key press to an action, given what currently has focus
pub fn get_action(focus: Focus, key: KeyEvent) -> Option<Action> {
    // AltGr arrives as Ctrl+Alt on Windows and is a plain character
    if key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('s') => Some(Action::Submit),
            KeyCode::Char('t') => Some(Action::FillNow),
            _ => None,
        };
    }

    // keys that do the same thing everywhere
    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab | KeyCode::Down => return Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => return Some(Action::FocusPrev),
        KeyCode::F(2) => return Some(Action::SelectMode(RecordKind::Dispatch)),
        KeyCode::F(3) => return Some(Action::SelectMode(RecordKind::Return)),
        KeyCode::PageUp => return Some(Action::ScrollRecordsUp),
        KeyCode::PageDown => return Some(Action::ScrollRecordsDown),
        _ => {}
    }

    match focus {
        Focus::ModeButton(_) | Focus::SubmitButton => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
            _ => None,
        },
        Focus::Field(field) => match key.code {
            KeyCode::Enter if field.is_multiline() => Some(Action::Newline),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// Handles a key press; returns true when the app should exit
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(app.focus, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
