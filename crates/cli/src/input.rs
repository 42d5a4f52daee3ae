//! Keyboard handling for the demonstration loop.
//!
//! Owns the key-to-command mapping so the loop stays agnostic about concrete
//! bindings or `crossterm` event details.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Flip snapshot collection on or off.
    Toggle,
    /// Print the current container as JSON.
    Dump,
    /// No meaningful command was produced.
    None,
}

/// Converts a raw key event into a higher-level command.
pub fn handle_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(' ') | KeyCode::F(8) => KeyAction::Toggle,
        KeyCode::Char('d') => KeyAction::Dump,
        _ => KeyAction::None,
    }
}
