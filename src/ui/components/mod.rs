//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements. Each component is responsible for rendering a specific part of
//! the interface.
//!
//! # Components
//!
//! - [`search`]: Search input box with inline theme switch
//! - [`chips`]: Filter chip rows
//! - [`cards`]: Recipe card list
//! - [`navbar`]: Bottom navigation bar
//! - [`placeholder`]: Centered headline for the Favorites/Profile screens
//!
//! # Layout Modes
//!
//! Two high-level layout functions, dispatched by screen:
//!
//! - [`render_home_screen`]: search bar + chips + card list + nav bar
//! - [`render_placeholder_screen`]: centered headline + nav bar

mod cards;
mod chips;
mod navbar;
mod placeholder;
mod search;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{PlaceholderInfo, UIViewModel};

use cards::render_cards;
use chips::render_chip_rows;
use navbar::render_nav_bar;
use placeholder::render_placeholder;
use search::render_search_bar;

/// Renders the Home screen layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Search box with theme switch - 3 lines]
/// [Chip rows - 2 lines]
/// [blank line]
/// [Card list]
/// [Border]
/// [Navigation bar]
/// ```
pub fn render_home_screen(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_chip_rows(current_row, &vm.chip_rows, theme, cols);
    current_row += 1;

    // Cards stop above the nav bar's separator border.
    let max_row = rows.saturating_sub(2);
    render_cards(current_row, &vm.cards, theme, cols, max_row);

    render_nav_bar(&vm.nav_items, theme, rows, cols);
}

/// Renders a placeholder screen layout (Favorites, Profile).
///
/// Layout structure:
/// ```text
/// [Centered headline in the upper third]
/// [Border]
/// [Navigation bar]
/// ```
pub fn render_placeholder_screen(
    vm: &UIViewModel,
    info: &PlaceholderInfo,
    theme: &Theme,
    rows: usize,
    cols: usize,
) {
    render_placeholder(info, theme, rows, cols);
    render_nav_bar(&vm.nav_items, theme, rows, cols);
}
