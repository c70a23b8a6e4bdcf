//! Filter chip component renderer.
//!
//! Renders the two chip rows, three chips per row in a fixed grid. Selected
//! chips fill with the accent color; unselected chips render as outlined
//! labels in the border color.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ChipItem;

/// Renders the chip rows starting at the specified row.
///
/// Each row splits the terminal width into equal cells and centers one chip
/// per cell.
///
/// # Returns
///
/// The next available row position (row + number of rows).
pub fn render_chip_rows(row: usize, chip_rows: &[Vec<ChipItem>], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for chips in chip_rows {
        render_chip_row(current_row, chips, theme, cols);
        current_row += 1;
    }
    current_row
}

fn render_chip_row(row: usize, chips: &[ChipItem], theme: &Theme, cols: usize) {
    if chips.is_empty() {
        return;
    }
    let cell_width = cols / chips.len();

    position_cursor(row, 1);
    for chip in chips {
        let text = format!("( {} )", chip.label);
        let text_len = text.chars().count().min(cell_width);
        let padding = cell_width.saturating_sub(text_len);
        let left = padding / 2;

        print!("{}", " ".repeat(left));
        if chip.selected {
            print!("{}", Theme::bg(&theme.colors.accent));
            print!("{}", Theme::fg(&theme.colors.on_accent));
        } else {
            print!("{}", Theme::fg(&theme.colors.border));
        }
        print!("{text}");
        print!("{}", Theme::reset());
        print!("{}", " ".repeat(padding - left));
    }
}
