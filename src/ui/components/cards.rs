//! Recipe card component renderer.
//!
//! Renders the windowed card list. Each card occupies a fixed number of rows:
//! a rounded border, an image placeholder strip with the favorite glyph at
//! the top right, the bold title, the two detail lines, and the Details
//! affordance.
//!
//! Entering cards are drawn offset downward within their slot and dimmed
//! until the entrance progress settles, which reads as the fade-and-slide-up
//! reveal: absent, then sliding into final position, then at rest.

use crate::app::state::CARD_HEIGHT;
use crate::ui::helpers::{entrance_offset_rows, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Scale above which the favorite glyph renders emphasized.
const EMPHASIS_SCALE: f32 = 1.1;

/// A card body line: styled text plus its visible width.
struct BodyLine {
    styled: String,
    visual_len: usize,
}

/// Renders the card list starting at the specified row.
///
/// Cards are clipped at `max_row` so the list never overlaps the navigation
/// bar.
///
/// # Returns
///
/// The next available row position.
pub fn render_cards(
    row: usize,
    cards: &[CardItem],
    theme: &Theme,
    cols: usize,
    max_row: usize,
) -> usize {
    let mut slot_row = row;
    for card in cards {
        if slot_row + CARD_HEIGHT > max_row {
            break;
        }
        render_card(slot_row, card, theme, cols, max_row);
        slot_row += CARD_HEIGHT;
    }
    slot_row
}

fn render_card(slot_row: usize, card: &CardItem, theme: &Theme, cols: usize, max_row: usize) {
    let offset = entrance_offset_rows(card.entrance, CARD_HEIGHT);
    let top = slot_row + offset;
    let entering = card.entrance < 1.0;

    let inner_width = cols.saturating_sub(5);
    let border_fg = if card.is_cursor {
        Theme::fg(&theme.colors.accent)
    } else {
        Theme::fg(&theme.colors.border)
    };
    // Dimming the whole card approximates the entrance fade.
    let base = if entering { Theme::dim() } else { "" };

    let body = [
        image_line(card, theme, inner_width),
        BodyLine {
            styled: format!("{}{}{}", Theme::bold(), card.title, Theme::reset()),
            visual_len: card.title.chars().count(),
        },
        detail_line(&card.difficulty_line, theme),
        detail_line(&card.time_line, theme),
        detail_line("[ Details ]", theme),
    ];

    let mut current = top;
    if current <= max_row {
        position_cursor(current, 2);
        print!("{base}{border_fg}╭{}╮{}", "─".repeat(inner_width + 2), Theme::reset());
    }

    for line in body {
        current += 1;
        if current > max_row {
            return;
        }
        let padding = inner_width.saturating_sub(line.visual_len);
        position_cursor(current, 2);
        print!("{base}{border_fg}│ {}", Theme::reset());
        print!("{base}{}", line.styled);
        print!("{}", " ".repeat(padding));
        print!("{base}{border_fg} │{}", Theme::reset());
    }

    current += 1;
    if current <= max_row {
        position_cursor(current, 2);
        print!("{base}{border_fg}╰{}╯{}", "─".repeat(inner_width + 2), Theme::reset());
    }
}

/// Image placeholder strip with the favorite glyph pinned to the right.
fn image_line(card: &CardItem, theme: &Theme, inner_width: usize) -> BodyLine {
    let strip = format!("░░ {} ░░", card.image_label);
    let strip_len = strip.chars().count();

    let glyph = if card.favorite { "♥" } else { "♡" };
    let glyph_style = if card.favorite {
        let emphasis = if card.scale > EMPHASIS_SCALE {
            Theme::bold()
        } else {
            ""
        };
        format!("{emphasis}{}", Theme::fg(&theme.colors.accent))
    } else {
        Theme::fg(&theme.colors.text_dim)
    };

    let gap = inner_width.saturating_sub(strip_len + 1);
    BodyLine {
        styled: format!(
            "{}{strip}{}{}{glyph_style}{glyph}{}",
            Theme::fg(&theme.colors.image_fg),
            Theme::reset(),
            " ".repeat(gap),
            Theme::reset(),
        ),
        visual_len: inner_width,
    }
}

fn detail_line(text: &str, theme: &Theme) -> BodyLine {
    BodyLine {
        styled: format!(
            "{}{text}{}",
            Theme::fg(&theme.colors.text_normal),
            Theme::reset()
        ),
        visual_len: text.chars().count(),
    }
}
