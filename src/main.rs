//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Forkful
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize logging, restore the screen slot,
//!    create `AppState`
//! 2. **Subscribe**: Register for `Key` and `Timer` events
//! 3. **Update**: Map Zellij events to library events, delegate to
//!    `handle_event`, execute returned actions
//! 4. **Render**: Run the first-render hook, then paint the view model
//!
//! # Event Mapping
//!
//! Zellij events are translated to library events:
//!
//! - `Key(Tab)` → `Event::SelectScreen(next)` (cycles Home → Favorites → Profile)
//! - `Key(j/Down)` / `Key(k/Up)` → `Event::KeyDown` / `Event::KeyUp`
//! - `Key(f/Enter)` → `Event::ToggleFavorite`
//! - `Key(t)` → `Event::SetDarkTheme(!dark)`
//! - `Key(1..6)` → `Event::ToggleFilter(tag)`
//! - `Key(/)` → `Event::SearchMode`
//! - `Timer(elapsed)` → `Event::Tick(elapsed)`
//!
//! # Keybindings
//!
//! In browse mode:
//! - `Tab`: Next screen
//! - `j`/`Down`, `k`/`Up`: Move the card cursor (Home)
//! - `f`/`Enter`: Toggle favorite on the cursor card
//! - `t`: Flip the theme switch
//! - `1`-`6`: Toggle the filter chips
//! - `/`: Enter search
//! - `q`: Close the plugin
//!
//! In search mode:
//! - Printable keys: Type into the query
//! - `Backspace`: Delete
//! - `Enter`: Keep the query and return to browsing
//! - `Esc`: Clear the query and return to browsing

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use forkful::{handle_event, Action, Config, Event, FilterTag, InputMode, ScreenSlot};

register_plugin!(State);

/// Seconds between animation frame ticks (~30 fps).
const FRAME_SECS: f64 = 1.0 / 30.0;

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns: the restore
/// slot handle and frame-tick scheduling.
struct State {
    /// Core application state from the library layer.
    app: forkful::app::AppState,

    /// Single-slot screen persistence.
    slot: ScreenSlot,

    /// Whether a frame timer is already in flight.
    frame_pending: bool,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: forkful::initialize(&default_config, forkful::ScreenId::Home),
            slot: ScreenSlot::new(forkful::infrastructure::get_data_dir().join("screen.json")),
            frame_pending: false,
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes logging, restores the selected
    /// screen from the slot, and subscribes to events. No permissions are
    /// requested: the plugin only touches its own `/data` mount.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        forkful::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        let restored = self.slot.load();
        self.app = forkful::initialize(&config, restored);
        tracing::debug!("app state initialized");

        subscribe(&[EventType::Key, EventType::Timer]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(elapsed) => {
                self.frame_pending = false;
                #[allow(clippy::cast_possible_truncation)]
                let dt = elapsed as f32;
                Event::Tick(dt)
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Runs the first-render hook (mounting card state and firing one-shot
    /// entrance reveals for cards appearing for the first time), schedules a
    /// frame tick while animations are in flight, then delegates to the
    /// library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        let animating = self.app.prepare_render();
        if animating {
            self.schedule_frame();
        }
        forkful::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if self.app.input_mode == InputMode::Search {
            return Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::SubmitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        Some(match key.bare_key {
            BareKey::Tab => Event::SelectScreen(self.app.nav.current().next()),
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter | BareKey::Char('f') => Event::ToggleFavorite,
            BareKey::Char('t') => Event::SetDarkTheme(!self.app.theme.is_dark()),
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char(c @ '1'..='6') => {
                let number = c.to_digit(10)? as usize;
                Event::ToggleFilter(FilterTag::from_chip_number(number)?)
            }
            _ => return None,
        })
    }

    /// Requests one animation frame tick unless one is already in flight.
    fn schedule_frame(&mut self) {
        if self.frame_pending {
            return;
        }
        self.frame_pending = true;
        set_timeout(FRAME_SECS);
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls and slot writes.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `PersistScreen`: Write the restore slot (best-effort; failures are
    ///   logged and swallowed)
    /// - `ScheduleFrame`: Request the next animation timer tick
    fn execute_action(&mut self, action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PersistScreen(screen) => {
                if let Err(e) = self.slot.save(screen) {
                    tracing::debug!(error = %e, "failed to persist screen slot");
                }
            }
            Action::ScheduleFrame => {
                self.schedule_frame();
            }
        }
    }
}
