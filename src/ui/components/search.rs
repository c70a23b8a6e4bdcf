//! Search bar component renderer.
//!
//! Renders the search input box with a bordered frame, the query text (or a
//! dimmed placeholder), and the theme switch inline at the right of the row.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on the left).
const SEARCH_BOX_MARGIN: usize = 2;

/// Columns reserved at the right of the row for the theme switch.
const SWITCH_WIDTH: usize = 10;

/// Renders the search row at the specified row.
///
/// Displays a 3-line bordered box containing the query (or placeholder) with
/// the theme switch rendered beside it, mirroring the source layout where
/// the switch shares the search row.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐
/// [margin] │ Search: ...      │  ● dark
/// [margin] └──────────────────┘
/// ```
///
/// # Returns
///
/// The next available row position (row + 3).
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN + SWITCH_WIDTH);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_border));
    print!("│");
    let text = if search.query.is_empty() && !search.editing {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        format!(" {}", search.placeholder)
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        let caret = if search.editing { "▌" } else { "" };
        format!(" {}{caret}", search.query)
    };
    let text_len = text.chars().count().min(inner_width);
    let shown: String = text.chars().take(inner_width).collect();
    print!("{shown}");
    print!("{}", " ".repeat(inner_width.saturating_sub(text_len)));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.search_border));
    print!("│");
    print!("{}", Theme::reset());

    let (knob, label) = if search.dark_mode {
        ("●", "dark")
    } else {
        ("○", "light")
    };
    print!("  {}{knob} {label}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
