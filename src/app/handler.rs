//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and timer ticks, translating them into state changes and action
//! sequences. It is the only place application state is mutated in response
//! to input, which keeps every transition synchronous and deterministic:
//! one event in, one state change, zero or more side-effect actions out.
//!
//! # Event categories
//!
//! - **Navigation**: `SelectScreen`
//! - **Theme**: `SetDarkTheme`
//! - **Filters**: `ToggleFilter`
//! - **Search**: `SearchMode`, `Char`, `Backspace`, `SubmitSearch`, `ExitSearch`
//! - **Cards**: `KeyDown`, `KeyUp`, `ToggleFavorite`
//! - **Animation**: `Tick`
//! - **Lifecycle**: `CloseFocus`
//!
//! # Ordering guarantee
//!
//! A state mutation performed here is visible to the next render pass before
//! any animation derived from it begins interpolating: handlers commit the
//! flag and only emit [`Action::ScheduleFrame`]; interpolation happens on
//! later `Tick` events.

use crate::app::filters::FilterTag;
use crate::app::modes::InputMode;
use crate::app::nav::ScreenId;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input or the host timer.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Selects a top-level screen.
    SelectScreen(ScreenId),
    /// Sets the dark-theme flag from the theme switch.
    SetDarkTheme(bool),
    /// Toggles one filter chip.
    ToggleFilter(FilterTag),
    /// Enters search input mode (Home only).
    SearchMode,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Leaves search mode keeping the query.
    SubmitSearch,
    /// Leaves search mode clearing the query.
    ExitSearch,
    /// Moves the card cursor down by one position (wraps to top).
    KeyDown,
    /// Moves the card cursor up by one position (wraps to bottom).
    KeyUp,
    /// Toggles the favorite flag on the cursor card.
    ToggleFavorite,
    /// Advances card animations by the elapsed seconds.
    Tick(f32),
    /// Closes the pane and hides the plugin UI.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions.
///
/// Returns a `(should_render, actions)` pair: `should_render` is `true` when
/// the event produced an observable state change, and `actions` are the side
/// effects the shim must execute. No-op events (re-selecting the current
/// screen, typing outside search mode, a tick with nothing animating) return
/// `(false, [])`.
///
/// # Errors
///
/// No transition here can currently fail; the `Result` keeps the signature
/// stable for callers as fallible actions appear at the edges.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SelectScreen(screen) => {
            if state.nav.select(*screen) {
                // Search input belongs to the Home subtree.
                state.input_mode = InputMode::Browse;
                Ok((true, vec![Action::PersistScreen(*screen)]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::SetDarkTheme(dark) => {
            let changed = state.theme.set_dark(*dark);
            tracing::debug!(dark, changed, "theme switch flipped");
            Ok((changed, vec![]))
        }
        Event::ToggleFilter(tag) => {
            if state.nav.current() != ScreenId::Home {
                return Ok((false, vec![]));
            }
            state.filters.toggle(*tag);
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            if state.nav.current() != ScreenId::Home {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, "search query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.search_query.pop();
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Browse;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Browse;
            state.search_query.clear();
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            if state.nav.current() != ScreenId::Home {
                return Ok((false, vec![]));
            }
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.nav.current() != ScreenId::Home {
                return Ok((false, vec![]));
            }
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::ToggleFavorite => {
            if state.nav.current() != ScreenId::Home {
                return Ok((false, vec![]));
            }
            let Some(id) = state.cursor_recipe().map(|recipe| recipe.id) else {
                tracing::debug!("no card under cursor");
                return Ok((false, vec![]));
            };
            let Some(card) = state.cards.get_mut(id) else {
                // First render pass has not mounted the card yet.
                return Ok((false, vec![]));
            };
            let favorite = card.toggle_favorite();
            tracing::debug!(recipe_id = id.0, favorite, "favorite toggled");
            Ok((true, vec![Action::ScheduleFrame]))
        }
        Event::Tick(dt) => {
            if !state.cards.animating() {
                return Ok((false, vec![]));
            }
            state.cards.advance(*dt);
            let actions = if state.cards.animating() {
                vec![Action::ScheduleFrame]
            } else {
                vec![]
            };
            Ok((true, actions))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::ThemeMode;
    use crate::domain::catalog;

    fn home_state() -> AppState {
        let mut state = AppState::new(catalog(), ScreenId::Home, ThemeMode::Light);
        state.prepare_render();
        state
    }

    #[test]
    fn test_filter_toggle_round_trip() {
        // Scenario: Home, Light, no filters; toggle Quick twice.
        let mut state = home_state();
        assert_eq!(state.nav.current(), ScreenId::Home);
        assert!(!state.theme.is_dark());
        assert!(state.filters.is_empty());

        handle_event(&mut state, &Event::ToggleFilter(FilterTag::Quick)).unwrap();
        assert!(state.filters.contains(FilterTag::Quick));
        assert_eq!(state.filters.len(), 1);

        handle_event(&mut state, &Event::ToggleFilter(FilterTag::Quick)).unwrap();
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_screen_select_second_call_records_nothing() {
        let mut state = home_state();

        let (rendered, actions) =
            handle_event(&mut state, &Event::SelectScreen(ScreenId::Favorites)).unwrap();
        assert!(rendered);
        assert_eq!(actions, vec![Action::PersistScreen(ScreenId::Favorites)]);
        assert_eq!(state.nav.current(), ScreenId::Favorites);

        let (rendered, actions) =
            handle_event(&mut state, &Event::SelectScreen(ScreenId::Favorites)).unwrap();
        assert!(!rendered, "second select triggers no observable change");
        assert!(actions.is_empty());
        assert_eq!(state.nav.current(), ScreenId::Favorites);
    }

    #[test]
    fn test_greek_salad_card_lifecycle() {
        // Scenario: first render, then tap favorite twice on "Greek Salad".
        let mut state = home_state();
        let (recipe, card) = state.cards_in_order().next().unwrap();
        assert_eq!(recipe.name, "Greek Salad");
        assert!(card.revealed());
        assert!(!card.favorite());

        // Settle the entrance so the scale reads at rest.
        handle_event(&mut state, &Event::Tick(1.0)).unwrap();
        let (_, card) = state.cards_in_order().next().unwrap();
        assert!((card.scale() - 1.0).abs() < 1e-4);

        let (rendered, actions) = handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        assert!(rendered);
        assert_eq!(actions, vec![Action::ScheduleFrame]);
        handle_event(&mut state, &Event::Tick(1.0)).unwrap();
        let (_, card) = state.cards_in_order().next().unwrap();
        assert!(card.favorite());
        assert!((card.scale() - 1.2).abs() < 1e-4);

        handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        handle_event(&mut state, &Event::Tick(1.0)).unwrap();
        let (_, card) = state.cards_in_order().next().unwrap();
        assert!(!card.favorite());
        assert!((card.scale() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_typing_outside_search_mode_is_ignored() {
        let mut state = home_state();
        let (rendered, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!rendered);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn test_search_editing_and_exit() {
        let mut state = home_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "sala".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.search_query, "sal");

        handle_event(&mut state, &Event::SubmitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.search_query, "sal", "submit keeps the query");

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert!(state.search_query.is_empty(), "escape clears the query");
    }

    #[test]
    fn test_leaving_home_resets_search_mode() {
        let mut state = home_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::SelectScreen(ScreenId::Profile)).unwrap();
        assert_eq!(state.input_mode, InputMode::Browse);
    }

    #[test]
    fn test_tick_schedules_frames_until_settled() {
        let mut state = home_state();
        assert!(state.cards.animating(), "entrance runs after first render");

        let (rendered, actions) = handle_event(&mut state, &Event::Tick(0.1)).unwrap();
        assert!(rendered);
        assert_eq!(actions, vec![Action::ScheduleFrame]);

        let (rendered, actions) = handle_event(&mut state, &Event::Tick(1.0)).unwrap();
        assert!(rendered);
        assert!(actions.is_empty(), "settled animations stop the frame loop");

        let (rendered, _) = handle_event(&mut state, &Event::Tick(0.1)).unwrap();
        assert!(!rendered, "idle ticks are no-ops");
    }

    #[test]
    fn test_favorite_ignored_off_home() {
        let mut state = home_state();
        handle_event(&mut state, &Event::SelectScreen(ScreenId::Favorites)).unwrap();
        state.prepare_render();

        let (rendered, actions) = handle_event(&mut state, &Event::ToggleFavorite).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_close_focus_emits_action_without_render() {
        let mut state = home_state();
        let (rendered, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!rendered);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
