//! Forkful: a Zellij plugin for browsing a recipe catalog.
//!
//! Forkful is a terminal plugin that shows a small fixed recipe catalog on a
//! single screen, with:
//! - Bottom navigation between Home, Favorites, and Profile
//! - A light/dark theme switch driving two fixed palettes
//! - A free-text search input and six multi-select filter chips
//! - Per-card entrance reveal and favorite toggle animation state
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Controllers
//! │  - Card state lifecycle                             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Restore Layer │
//! │ (ui/)         │   │ (restore/)    │
//! │ - Rendering   │   │ - Screen slot │
//! │ - Palettes    │   │ - JSON I/O    │
//! │ - Components  │   │               │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Plugin data dir (infrastructure/)                │
//! │  - Error types (domain/error)                       │
//! │  - Recipe model + catalog (domain/recipe)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Recipe, errors)
//! - [`infrastructure`]: Plugin sandbox paths
//! - [`restore`]: Single-slot screen persistence
//! - [`ui`]: Terminal rendering with palette support
//! - `observability`: File-based logging (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/forkful.wasm" {
//!         theme "dark"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Event Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize logging,
//!    restore the selected screen from the slot, create `AppState`,
//!    subscribe to key and timer events.
//! 2. **Input**: each keystroke maps to at most one library [`Event`];
//!    [`handle_event`] mutates state synchronously and returns the actions
//!    to execute (persist the screen slot, schedule an animation frame,
//!    close the pane).
//! 3. **Render**: the shim runs the first-render hook (mounting card state
//!    and firing one-shot entrance reveals), then paints the view model.
//!    While any card animation is in flight the shim keeps requesting timer
//!    ticks, each of which advances the interpolations over the committed
//!    state.
//!
//! # Persistence
//!
//! Only the selected screen survives a relaunch of the same session, kept
//! in a single JSON slot under the plugin's `/data` mount. Theme, filters,
//! search text, favorites, and card animation state are transient by
//! design.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod restore;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, FilterTag, InputMode, ScreenId, ThemeMode};
pub use domain::{catalog, Difficulty, ForkfulError, ImageRef, Recipe, RecipeId, Result};
pub use restore::ScreenSlot;
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/forkful.wasm" {
///     theme "dark"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Initial palette mode.
    ///
    /// Options: `light`, `dark`. Unknown values fall back to light. The
    /// switch on the Home screen flips the mode at runtime; the flip is not
    /// persisted. Default: `light`.
    pub theme: Option<String>,

    /// Log level for the rotating log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Missing keys fall back to defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use forkful::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "dark".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme.as_deref(), Some("dark"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        Self {
            theme: config.get("theme").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Resolves the configured initial theme mode.
    ///
    /// Unknown values fall back to [`ThemeMode::Light`] with a debug log.
    #[must_use]
    pub fn initial_theme(&self) -> ThemeMode {
        match self.theme.as_deref() {
            Some("dark") => ThemeMode::Dark,
            Some("light") | None => ThemeMode::Light,
            Some(other) => {
                tracing::debug!(theme = %other, "unknown theme name, using light");
                ThemeMode::Light
            }
        }
    }
}

/// Initializes the application state with configuration.
///
/// Creates a new `AppState` over the built-in catalog, starting on the
/// restored screen with the configured palette mode. Card state starts
/// empty; the first render pass mounts it.
///
/// # Parameters
///
/// * `config` - Plugin configuration
/// * `screen` - Restored (or default) screen from the restore slot
///
/// # Example
///
/// ```rust
/// use forkful::{initialize, Config, ScreenId};
///
/// let state = initialize(&Config::default(), ScreenId::Home);
/// assert_eq!(state.nav.current(), ScreenId::Home);
/// ```
#[must_use]
pub fn initialize(config: &Config, screen: ScreenId) -> AppState {
    tracing::debug!(
        screen = screen.label(),
        theme = ?config.theme,
        "initializing forkful plugin"
    );

    AppState::new(domain::catalog(), screen, config.initial_theme())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_zellij_map() {
        let mut map = BTreeMap::new();
        map.insert("theme".to_string(), "dark".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.initial_theme(), ThemeMode::Dark);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_light() {
        let config = Config {
            theme: Some("solarized".to_string()),
            ..Default::default()
        };
        assert_eq!(config.initial_theme(), ThemeMode::Light);
    }

    #[test]
    fn test_initialize_starts_on_restored_screen() {
        let state = initialize(&Config::default(), ScreenId::Favorites);
        assert_eq!(state.nav.current(), ScreenId::Favorites);
        assert!(!state.theme.is_dark());
        assert_eq!(state.catalog.len(), 3);
    }
}
