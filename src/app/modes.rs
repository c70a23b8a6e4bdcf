//! Theme and input mode state types for the application.
//!
//! This module defines the two small top-level mode enums: the light/dark
//! theme flag driving palette selection, and the input mode controlling how
//! keystrokes are interpreted. Both are matched exhaustively wherever they
//! are consumed.

/// Theme flag selecting between exactly two fixed palettes.
///
/// There are no intermediate states and no persistence: the mode resets to
/// [`ThemeMode::Light`] on every cold start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light palette (default).
    #[default]
    Light,

    /// Dark palette.
    Dark,
}

impl ThemeMode {
    /// Builds a mode from the boolean carried by the theme switch.
    #[must_use]
    pub const fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Returns `true` for the dark palette.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Owner of the theme flag.
///
/// Drives selection between the two fixed palettes. Mutated only by the
/// event handler in response to the theme switch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeController {
    mode: ThemeMode,
}

impl ThemeController {
    /// Creates a controller starting in the given mode.
    #[must_use]
    pub const fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Sets the dark flag. Returns `true` if the mode changed.
    pub fn set_dark(&mut self, dark: bool) -> bool {
        let next = ThemeMode::from_dark(dark);
        if self.mode == next {
            return false;
        }
        self.mode = next;
        true
    }

    /// Returns `true` while the dark palette is active.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Returns the current theme mode.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default browsing mode.
    ///
    /// Available keybindings: j/k (move card cursor), f/enter (favorite),
    /// t (theme switch), 1-6 (filter chips), tab (next screen), / (search),
    /// q (quit).
    #[default]
    Browse,

    /// Active search input mode.
    ///
    /// Printable characters append to the query, backspace deletes, esc
    /// clears and exits, enter returns to browsing keeping the query.
    Search,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_light() {
        let theme = ThemeController::default();
        assert!(!theme.is_dark());
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_set_dark_reports_change() {
        let mut theme = ThemeController::default();
        assert!(theme.set_dark(true));
        assert!(theme.is_dark());
        assert!(!theme.set_dark(true), "re-setting the same mode is a no-op");
        assert!(theme.set_dark(false));
        assert!(!theme.is_dark());
    }
}
