//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning and
//! centered line printing with ANSI styling.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are
/// 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints a line centered within `cols`, padded to the full width.
///
/// The `style` prefix is applied before the text and reset afterwards. If
/// the terminal cannot evenly divide, left padding is slightly larger.
pub fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text_len = text.chars().count().min(cols);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}

/// Returns how many rows an entering card is still offset downward.
///
/// The entrance slide starts at half the card's height below the final
/// position and closes as progress approaches 1.0.
#[must_use]
pub fn entrance_offset_rows(entrance: f32, card_height: usize) -> usize {
    let start_offset = card_height as f32 / 2.0;
    let remaining = (1.0 - entrance.clamp(0.0, 1.0)) * start_offset;
    remaining.round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_offset_closes_with_progress() {
        let height = 7;
        let start = entrance_offset_rows(0.0, height);
        assert_eq!(start, 4, "starts at half the card height");
        assert!(entrance_offset_rows(0.5, height) < start);
        assert_eq!(entrance_offset_rows(1.0, height), 0);
    }

    #[test]
    fn test_entrance_offset_clamps_progress() {
        assert_eq!(entrance_offset_rows(2.0, 7), 0);
        assert_eq!(entrance_offset_rows(-1.0, 7), 4);
    }
}
