//! Keyboard navigation.
//!
//! Keys arrive from the page by DOM name. [`Key::from_name`] maps the handful
//! the component reacts to onto a closed enum; anything else is `None` and
//! falls through to ordinary text input. Each key maps onto exactly one
//! [`KeyAction`].
//!
//! # Example
//!
//! ```rust
//! use pillbox::keys::{Key, KeyAction};
//!
//! assert_eq!(Key::from_name("ArrowDown"), Some(Key::ArrowDown));
//! assert_eq!(Key::from_name("a"), None);
//! assert_eq!(Key::Enter.action(), KeyAction::ToggleFocused);
//! ```

use std::fmt;

/// Keys the component handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Down arrow.
    ArrowDown,
    /// Up arrow.
    ArrowUp,
    /// Enter / Return.
    Enter,
    /// Backspace.
    Backspace,
    /// Escape.
    Escape,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowDown" | "Down" => Some(Self::ArrowDown),
            "ArrowUp" | "Up" => Some(Self::ArrowUp),
            "Enter" => Some(Self::Enter),
            "Backspace" => Some(Self::Backspace),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }

    /// Returns the handler this key dispatches to.
    pub fn action(self) -> KeyAction {
        match self {
            Self::ArrowDown => KeyAction::FocusNext,
            Self::ArrowUp => KeyAction::FocusPrev,
            Self::Enter => KeyAction::ToggleFocused,
            Self::Backspace => KeyAction::RemoveLast,
            Self::Escape => KeyAction::ClearOrToggle,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ArrowDown => "ArrowDown",
            Self::ArrowUp => "ArrowUp",
            Self::Enter => "Enter",
            Self::Backspace => "Backspace",
            Self::Escape => "Escape",
        };
        f.write_str(name)
    }
}

/// What a key press does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Focus the next row, wrapping to the first.
    FocusNext,
    /// Focus the previous row, wrapping to the last.
    FocusPrev,
    /// Click the focused row's checkbox.
    ToggleFocused,
    /// Pop the last selected item when the search field is empty.
    RemoveLast,
    /// Clear the search text, or toggle the dropdown if already empty.
    ClearOrToggle,
}

/// Returns the row index focus moves to.
///
/// With no current focus, moving forward lands on the first row and moving
/// backward on the last. Returns `None` when there are no rows.
pub fn step_focus(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    let next = match (current, forward) {
        (None, true) => 0,
        (None, false) => last,
        (Some(i), true) if i >= last => 0,
        (Some(i), true) => i + 1,
        (Some(0), false) => last,
        (Some(i), false) => (i - 1).min(last),
    };
    Some(next)
}
