//! Bottom navigation bar component renderer.
//!
//! Renders the three navigation items in equal-width cells above the last
//! terminal row, with the selected item highlighted in the accent color.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NavItem;

/// Renders the navigation bar in the bottom two terminal rows.
///
/// A separator border spans the width one row above the item row.
pub fn render_nav_bar(items: &[NavItem], theme: &Theme, rows: usize, cols: usize) {
    if items.is_empty() || rows < 2 {
        return;
    }

    let border_row = rows - 1;
    position_cursor(border_row, 1);
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());

    let cell_width = cols / items.len();
    position_cursor(rows, 1);
    for item in items {
        let text = format!("{} {}", item.glyph, item.label);
        let text_len = text.chars().count().min(cell_width);
        let padding = cell_width.saturating_sub(text_len);
        let left = padding / 2;

        print!("{}", " ".repeat(left));
        if item.selected {
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{text}");
        print!("{}", Theme::reset());
        print!("{}", " ".repeat(padding - left));
    }
}
