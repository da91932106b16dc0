//! Dropdown visibility and the input area next to the pills.

use std::fmt;

/// Whether the dropdown list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dropdown {
    /// Hidden.
    #[default]
    Closed,
    /// Shown.
    Open,
}

impl Dropdown {
    /// Returns true when shown.
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

impl fmt::Display for Dropdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::Open => write!(f, "open"),
        }
    }
}

/// Layout of the free-text input area.
///
/// Once pills exist the input collapses whenever the dropdown closes, and the
/// search field gets top padding so it sits below the pills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputArea {
    /// Whether the input container is displayed.
    pub visible: bool,
    /// Whether the search field is padded below the pills.
    pub padded: bool,
    /// Whether the search field has keyboard focus.
    pub focused: bool,
}

impl Default for InputArea {
    fn default() -> Self {
        Self {
            visible: true,
            padded: false,
            focused: false,
        }
    }
}

impl InputArea {
    /// Updates the layout after the selection changed size.
    pub fn selection_changed(&mut self, has_pills: bool) {
        self.padded = has_pills;
        if !has_pills {
            self.visible = true;
        }
    }

    /// Collapses the input if pills exist; called when the dropdown closes.
    pub fn dropdown_closed(&mut self, has_pills: bool) {
        if has_pills {
            self.visible = false;
        }
        self.focused = false;
    }

    /// Shows the input and focuses the search field.
    pub fn focus(&mut self) {
        self.visible = true;
        self.focused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert!(!Dropdown::default().is_open());
        assert_eq!(Dropdown::Open.to_string(), "open");
        assert_eq!(Dropdown::default().to_string(), "closed");
    }

    #[test]
    fn test_input_collapses_only_with_pills() {
        let mut area = InputArea::default();
        area.dropdown_closed(false);
        assert!(area.visible);
        area.dropdown_closed(true);
        assert!(!area.visible);
    }

    #[test]
    fn test_emptied_selection_restores_input() {
        let mut area = InputArea::default();
        area.selection_changed(true);
        area.dropdown_closed(true);
        assert!(area.padded);
        area.selection_changed(false);
        assert!(area.visible);
        assert!(!area.padded);
    }

    #[test]
    fn test_focus_restores_input() {
        let mut area = InputArea::default();
        area.dropdown_closed(true);
        area.focus();
        assert!(area.visible);
        assert!(area.focused);
    }
}
