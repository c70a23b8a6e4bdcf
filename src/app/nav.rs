//! Top-level screen navigation.
//!
//! This module defines the exhaustive [`ScreenId`] enum and the
//! [`NavigationController`] owning the currently selected screen. Screen
//! dispatch is always a total match on the enum, so an unmatched screen
//! cannot exist at runtime; the only place an unrecognized value can appear
//! is the restore slot, where [`ScreenId::from_label`] handles it by
//! returning `None` and the caller falls back to [`ScreenId::Home`].

/// One of the three mutually exclusive top-level screens.
///
/// Exactly one screen is current at any time. Default is [`ScreenId::Home`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenId {
    /// Search bar, filter chips, and the recipe list.
    #[default]
    Home,

    /// Favorites placeholder screen.
    Favorites,

    /// Profile placeholder screen.
    Profile,
}

impl ScreenId {
    /// All screens in navigation-bar order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Favorites, Self::Profile];

    /// Returns the display label shown in the navigation bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Favorites => "Favorites",
            Self::Profile => "Profile",
        }
    }

    /// Returns the stable label used by the restore slot.
    #[must_use]
    pub const fn slot_label(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Favorites => "favorites",
            Self::Profile => "profile",
        }
    }

    /// Parses a restore-slot label.
    ///
    /// Returns `None` for anything outside the enumerated set; callers fall
    /// back to [`ScreenId::Home`] rather than surfacing an error.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "home" => Some(Self::Home),
            "favorites" => Some(Self::Favorites),
            "profile" => Some(Self::Profile),
            _ => None,
        }
    }

    /// Returns the next screen in navigation-bar order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::Favorites,
            Self::Favorites => Self::Profile,
            Self::Profile => Self::Home,
        }
    }
}

/// Owner of the currently selected screen.
///
/// The current value is the one piece of state that survives a relaunch of
/// the same session; the shim persists it through the restore slot whenever
/// [`NavigationController::select`] reports a change.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationController {
    current: ScreenId,
}

impl NavigationController {
    /// Creates a controller starting on the given screen.
    #[must_use]
    pub const fn new(current: ScreenId) -> Self {
        Self { current }
    }

    /// Selects a screen. Returns `true` if the current screen changed.
    ///
    /// Selecting the already-current screen is a no-op: no state change, no
    /// re-render, no persistence write.
    pub fn select(&mut self, screen: ScreenId) -> bool {
        if self.current == screen {
            tracing::debug!(screen = screen.label(), "screen already current");
            return false;
        }
        tracing::debug!(
            from = self.current.label(),
            to = screen.label(),
            "screen selected"
        );
        self.current = screen;
        true
    }

    /// Returns the currently selected screen.
    #[must_use]
    pub const fn current(&self) -> ScreenId {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screen_is_home() {
        assert_eq!(NavigationController::default().current(), ScreenId::Home);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut nav = NavigationController::default();
        assert!(nav.select(ScreenId::Favorites));
        assert_eq!(nav.current(), ScreenId::Favorites);

        assert!(!nav.select(ScreenId::Favorites), "second select is a no-op");
        assert_eq!(nav.current(), ScreenId::Favorites);
    }

    #[test]
    fn test_unrecognized_label_falls_back_to_home() {
        assert_eq!(ScreenId::from_label("settings"), None);
        let restored = ScreenId::from_label("settings").unwrap_or_default();
        assert_eq!(restored, ScreenId::Home);
    }

    #[test]
    fn test_slot_labels_round_trip() {
        for screen in ScreenId::ALL {
            assert_eq!(ScreenId::from_label(screen.slot_label()), Some(screen));
        }
    }

    #[test]
    fn test_next_cycles_through_all_screens() {
        let mut screen = ScreenId::Home;
        for _ in 0..3 {
            screen = screen.next();
        }
        assert_eq!(screen, ScreenId::Home);
    }
}
