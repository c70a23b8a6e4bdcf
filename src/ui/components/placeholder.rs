//! Placeholder screen component renderer.
//!
//! Renders the centered headline shown by the Favorites and Profile screens,
//! which carry no content of their own.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PlaceholderInfo;

/// Renders a centered headline in the upper third of the screen.
pub fn render_placeholder(info: &PlaceholderInfo, theme: &Theme, rows: usize, cols: usize) {
    let headline_row = (rows / 3).max(1);
    let style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.headline_fg));
    print_centered(headline_row, &info.headline, &style, cols);
}
