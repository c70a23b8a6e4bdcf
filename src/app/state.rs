//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin. It composes the navigation, theme, and filter controllers with the
//! recipe catalog, the search text, and the per-card state deck, and turns
//! state snapshots into renderable view models on demand. It is the single
//! source of truth for all transient UI state; nothing here is a global.
//!
//! # State components
//!
//! - **Catalog**: Immutable, ordered recipe list fixed at construction
//! - **Navigation**: Currently selected top-level screen
//! - **Theme**: Light/dark flag driving palette selection
//! - **Filters**: Selected filter tags (tracked, not applied to the list)
//! - **Search**: Free-text query plus the input mode interpreting keys
//! - **Cards**: Ephemeral per-card entrance/favorite state keyed by recipe id
//! - **Cursor**: Highlighted card position on the Home screen
//!
//! # Render flow
//!
//! The shim calls [`AppState::prepare_render`] at the top of every render
//! pass (the explicit first-render hook for card state), then
//! [`AppState::compute_viewmodel`] to obtain display-ready data.

use crate::app::cards::{CardDeck, CardState};
use crate::app::filters::{FilterSet, FilterTag};
use crate::app::modes::{InputMode, ThemeController, ThemeMode};
use crate::app::nav::{NavigationController, ScreenId};
use crate::domain::{Recipe, RecipeId};
use crate::ui::viewmodel::{
    CardItem, ChipItem, NavItem, PlaceholderInfo, SearchBarInfo, UIViewModel,
};

/// Rows one rendered card occupies, borders included.
pub const CARD_HEIGHT: usize = 7;

/// Rows of Home-screen chrome around the card list (top margin, search box,
/// chip rows, separators, navigation bar).
const HOME_CHROME_ROWS: usize = 10;

/// Search field placeholder shown while the query is empty.
const SEARCH_PLACEHOLDER: &str = "Search recipes...";

/// Central application state container.
///
/// Mutated only by the event handler in response to discrete user input, and
/// by the render path through the first-render hook. View models are computed
/// on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable recipe catalog in render order.
    pub catalog: Vec<Recipe>,

    /// Owner of the currently selected screen.
    pub nav: NavigationController,

    /// Owner of the light/dark flag.
    pub theme: ThemeController,

    /// Selected filter tags.
    pub filters: FilterSet,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current search query text.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace`, cleared by
    /// `ExitSearch`. Tracked for display only; it does not restrict the list.
    pub search_query: String,

    /// Per-card ephemeral state keyed by recipe id.
    pub cards: CardDeck,

    /// Zero-based index of the highlighted card within the catalog.
    cursor: usize,
}

impl AppState {
    /// Creates application state over a catalog.
    ///
    /// `screen` is the restored (or default) screen; `theme` the initial
    /// palette mode from host configuration. Card state starts empty and is
    /// populated by the first render pass.
    #[must_use]
    pub fn new(catalog: Vec<Recipe>, screen: ScreenId, theme: ThemeMode) -> Self {
        Self {
            catalog,
            nav: NavigationController::new(screen),
            theme: ThemeController::new(theme),
            filters: FilterSet::new(),
            input_mode: InputMode::Browse,
            search_query: String::new(),
            cards: CardDeck::new(),
            cursor: 0,
        }
    }

    /// Runs the first-render hook for the current render pass.
    ///
    /// On the Home screen every catalog entry is part of the rendered list,
    /// so card state is created (and the one-shot entrance fired) for ids
    /// appearing for the first time. On the other screens the list is
    /// unmounted and all card state is discarded. Returns whether any card
    /// animation is still in flight, so the shim can schedule a frame tick.
    pub fn prepare_render(&mut self) -> bool {
        match self.nav.current() {
            ScreenId::Home => {
                let rendered: Vec<RecipeId> = self.catalog.iter().map(|r| r.id).collect();
                self.cards.mark_rendered(&rendered);
            }
            ScreenId::Favorites | ScreenId::Profile => {
                self.cards.mark_rendered(&[]);
            }
        }
        if self.cursor >= self.catalog.len() {
            self.cursor = 0;
        }
        self.cards.animating()
    }

    /// Moves the card cursor down by one position, wrapping to the top.
    ///
    /// No-op on an empty catalog.
    pub fn move_cursor_down(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.catalog.len();
    }

    /// Moves the card cursor up by one position, wrapping to the bottom.
    ///
    /// No-op on an empty catalog.
    pub fn move_cursor_up(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.catalog.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Returns the recipe under the card cursor, if any.
    #[must_use]
    pub fn cursor_recipe(&self) -> Option<&Recipe> {
        self.catalog.get(self.cursor)
    }

    /// Returns the rendered card sequence in catalog order.
    ///
    /// Lazy and restartable: each call walks the catalog pairing every
    /// recipe with its mounted card state. The sequence is deliberately not
    /// restricted by the selected filters or the search text; every catalog
    /// entry renders regardless (see DESIGN.md).
    pub fn cards_in_order(&self) -> impl Iterator<Item = (&Recipe, &CardState)> + '_ {
        self.catalog
            .iter()
            .filter_map(|recipe| self.cards.get(recipe.id).map(|card| (recipe, card)))
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Dispatches totally on the current screen: Home produces the search
    /// bar, chip rows, and a windowed card list; Favorites and Profile
    /// produce a centered placeholder. The navigation bar is present on
    /// every screen.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!(
            "compute_viewmodel",
            screen = self.nav.current().label(),
            rows,
            cols
        )
        .entered();

        let nav_items = self.compute_nav_items();

        match self.nav.current() {
            ScreenId::Home => UIViewModel {
                nav_items,
                search_bar: Some(self.compute_search_bar()),
                chip_rows: self.compute_chip_rows(),
                cards: self.compute_cards(rows, cols),
                placeholder: None,
            },
            ScreenId::Favorites | ScreenId::Profile => UIViewModel {
                nav_items,
                search_bar: None,
                chip_rows: vec![],
                cards: vec![],
                placeholder: Some(PlaceholderInfo {
                    headline: self.nav.current().label().to_string(),
                }),
            },
        }
    }

    fn compute_nav_items(&self) -> Vec<NavItem> {
        ScreenId::ALL
            .iter()
            .map(|&screen| NavItem {
                label: screen.label(),
                glyph: match screen {
                    ScreenId::Home => "⌂",
                    ScreenId::Favorites => "♥",
                    ScreenId::Profile => "☻",
                },
                selected: screen == self.nav.current(),
            })
            .collect()
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.search_query.clone(),
            placeholder: SEARCH_PLACEHOLDER,
            editing: self.input_mode == InputMode::Search,
            dark_mode: self.theme.is_dark(),
        }
    }

    fn compute_chip_rows(&self) -> Vec<Vec<ChipItem>> {
        FilterTag::ALL
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|&tag| ChipItem {
                        label: tag.label(),
                        selected: self.filters.contains(tag),
                    })
                    .collect()
            })
            .collect()
    }

    /// Windows the card list so the cursor card stays visible.
    fn compute_cards(&self, rows: usize, cols: usize) -> Vec<CardItem> {
        let available_rows = rows.saturating_sub(HOME_CHROME_ROWS);
        let visible_count = (available_rows / CARD_HEIGHT).max(1);

        let total = self.catalog.len();
        let mut start = self.cursor.saturating_sub(visible_count / 2);
        let end = (start + visible_count).min(total);
        if end - start < visible_count && total >= visible_count {
            start = end.saturating_sub(visible_count);
        }

        self.cards_in_order()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
            .map(|(index, (recipe, card))| Self::compute_card_item(recipe, card, index == self.cursor, cols))
            .collect()
    }

    fn compute_card_item(recipe: &Recipe, card: &CardState, is_cursor: bool, cols: usize) -> CardItem {
        let inner_width = cols.saturating_sub(5);
        let title = if recipe.name.len() > inner_width && inner_width > 3 {
            format!("{}...", &recipe.name[..inner_width - 3])
        } else {
            recipe.name.clone()
        };

        CardItem {
            title,
            image_label: recipe.image.label().to_string(),
            difficulty_line: format!("Difficulty: {}", recipe.difficulty.label()),
            time_line: format!("Cooking time: {} min", recipe.minutes),
            favorite: card.favorite(),
            scale: card.scale(),
            entrance: card.entrance(),
            is_cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    fn home_state() -> AppState {
        AppState::new(catalog(), ScreenId::Home, ThemeMode::Light)
    }

    #[test]
    fn test_prepare_render_mounts_every_catalog_entry() {
        let mut state = home_state();
        assert!(state.cards.is_empty());

        state.prepare_render();
        assert_eq!(state.cards.len(), 3);
        assert!(state.cards_in_order().all(|(_, card)| card.revealed()));
    }

    #[test]
    fn test_cards_render_in_catalog_order() {
        let mut state = home_state();
        state.prepare_render();

        let names: Vec<&str> = state
            .cards_in_order()
            .map(|(recipe, _)| recipe.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["Greek Salad", "Avocado Toast", "Salmon with Vegetables"]
        );
    }

    #[test]
    fn test_filters_do_not_restrict_rendered_cards() {
        let mut state = home_state();
        state.filters.toggle(FilterTag::Quick);
        state.prepare_render();

        let vm = state.compute_viewmodel(40, 80);
        assert_eq!(vm.cards.len(), 3, "all entries render despite the filter");
    }

    #[test]
    fn test_leaving_home_discards_card_state() {
        let mut state = home_state();
        state.prepare_render();
        state
            .cards
            .get_mut(state.catalog[0].id)
            .unwrap()
            .toggle_favorite();

        state.nav.select(ScreenId::Favorites);
        state.prepare_render();
        assert!(state.cards.is_empty());

        // Returning remounts fresh state: entrance replays, favorite reset.
        state.nav.select(ScreenId::Home);
        state.prepare_render();
        let (_, card) = state.cards_in_order().next().unwrap();
        assert!(!card.favorite());
        assert!(card.animating());
    }

    #[test]
    fn test_cursor_wraps_both_directions() {
        let mut state = home_state();
        state.move_cursor_up();
        assert_eq!(state.cursor_recipe().unwrap().name, "Salmon with Vegetables");
        state.move_cursor_down();
        assert_eq!(state.cursor_recipe().unwrap().name, "Greek Salad");
    }

    #[test]
    fn test_placeholder_screens_have_no_home_widgets() {
        let mut state = home_state();
        state.nav.select(ScreenId::Profile);
        state.prepare_render();

        let vm = state.compute_viewmodel(40, 80);
        assert!(vm.search_bar.is_none());
        assert!(vm.chip_rows.is_empty());
        assert!(vm.cards.is_empty());
        assert_eq!(vm.placeholder.unwrap().headline, "Profile");
    }

    #[test]
    fn test_home_viewmodel_composition() {
        let mut state = home_state();
        state.filters.toggle(FilterTag::Dessert);
        state.prepare_render();

        let vm = state.compute_viewmodel(40, 80);
        assert_eq!(vm.nav_items.len(), 3);
        assert!(vm.nav_items[0].selected);
        assert_eq!(vm.chip_rows.len(), 2);
        assert_eq!(vm.chip_rows[0].len(), 3);
        assert!(vm.chip_rows[1][0].selected, "Dessert chip is filled");
        assert_eq!(vm.search_bar.unwrap().placeholder, "Search recipes...");
    }

    #[test]
    fn test_card_window_follows_cursor_on_short_terminals() {
        let mut state = home_state();
        state.prepare_render();

        // Room for a single card; the window must hold the cursor card.
        state.move_cursor_down();
        state.move_cursor_down();
        let vm = state.compute_viewmodel(HOME_CHROME_ROWS + CARD_HEIGHT, 80);
        assert_eq!(vm.cards.len(), 1);
        assert_eq!(vm.cards[0].title, "Salmon with Vegetables");
        assert!(vm.cards[0].is_cursor);
    }
}
