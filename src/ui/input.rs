use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::screen::SearchScreenIntent;

/// What the runtime should do with one key press.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    /// Run a search for the current input.
    Submit,
    /// Empty the input and return the service to idle.
    Clear,
    Screen(SearchScreenIntent),
    Ignore,
}

pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('u') => KeyAction::Clear,
            _ => KeyAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Esc => KeyAction::Clear,
        KeyCode::Backspace => KeyAction::Screen(SearchScreenIntent::Backspace),
        KeyCode::Up => KeyAction::Screen(SearchScreenIntent::MoveUp),
        KeyCode::Down => KeyAction::Screen(SearchScreenIntent::MoveDown),
        KeyCode::Char(c) => KeyAction::Screen(SearchScreenIntent::InsertChar(c)),
        _ => KeyAction::Ignore,
    }
}
