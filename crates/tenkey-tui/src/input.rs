//! Keyboard input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tenkey::prelude::Key;

/// Action resulting from a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward a keypad key to the accumulator.
    Press(Key),
    /// Quit the application.
    Quit,
    /// Ignored input.
    None,
}

/// Maps crossterm key events to keypad actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates an input handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps one key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> Action {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => Action::Quit,
                _ => Action::None,
            };
        }

        match code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c' | 'C') => Action::Press(Key::Clear),
            KeyCode::Char('n') => Action::Press(Key::ToggleSign),
            KeyCode::Char(ch) => Key::from_label(ch).map_or(Action::None, Action::Press),
            KeyCode::Enter => Action::Press(Key::Equals),
            KeyCode::Backspace => Action::Press(Key::Backspace),
            KeyCode::Esc => Action::Press(Key::Clear),
            _ => Action::None,
        }
    }
}
