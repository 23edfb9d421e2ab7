//! Global keyboard shortcut mapping.
//!
//! The interaction layer forwards raw key events; this module maps them to
//! editor actions. Only the undo/redo chords are global; everything else is
//! owned by the interaction layer itself.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editor actions reachable through a global shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Step back one recorded edit (Ctrl/Cmd+Z).
    Undo,
    /// Step forward one undone edit (Ctrl/Cmd+Shift+Z or Ctrl/Cmd+Y).
    Redo,
}

/// Maps a key event to its global action, if any.
///
/// Both Control and Super (Cmd on macOS) qualify as the chord modifier.
#[must_use]
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    let chord = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
    if !chord {
        return None;
    }

    match key.code {
        KeyCode::Char('z') | KeyCode::Char('Z') => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                Some(Action::Redo)
            } else {
                Some(Action::Undo)
            }
        }
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Redo),
        _ => None,
    }
}
