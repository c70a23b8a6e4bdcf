//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer; they contain no business logic, only display-ready data
//! such as pre-formatted detail lines and the current animation readings.

/// Complete UI view model for rendering.
///
/// Exactly one of the screen bodies is populated: Home fills `search_bar`,
/// `chip_rows`, and `cards`; Favorites and Profile fill `placeholder`. The
/// navigation bar is present on every screen.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Bottom navigation bar items, in bar order.
    pub nav_items: Vec<NavItem>,

    /// Search bar with inline theme switch (Home only).
    pub search_bar: Option<SearchBarInfo>,

    /// Filter chip rows (Home only; two rows of three).
    pub chip_rows: Vec<Vec<ChipItem>>,

    /// Windowed recipe card list (Home only).
    pub cards: Vec<CardItem>,

    /// Centered headline for the placeholder screens.
    pub placeholder: Option<PlaceholderInfo>,
}

/// One item in the bottom navigation bar.
#[derive(Debug, Clone)]
pub struct NavItem {
    /// Display label ("Home", "Favorites", "Profile").
    pub label: &'static str,

    /// Glyph rendered above the label.
    pub glyph: &'static str,

    /// Whether this item is the current screen.
    pub selected: bool,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Placeholder shown while the query is empty.
    pub placeholder: &'static str,

    /// Whether the search field currently receives keystrokes.
    pub editing: bool,

    /// Theme switch position rendered at the right of the row.
    pub dark_mode: bool,
}

/// One filter chip.
#[derive(Debug, Clone)]
pub struct ChipItem {
    /// Chip label.
    pub label: &'static str,

    /// Whether the chip is filled (tag selected).
    pub selected: bool,
}

/// Display information for a single recipe card.
///
/// Carries the card's committed animation readings; the renderer maps them
/// to terminal styling (row offset, dimming, glyph emphasis).
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Recipe name, truncated to the card width.
    pub title: String,

    /// Opaque image asset label for the placeholder strip.
    pub image_label: String,

    /// Pre-formatted difficulty line.
    pub difficulty_line: String,

    /// Pre-formatted cooking time line.
    pub time_line: String,

    /// Favorite flag: selects the filled/outlined glyph and its tint.
    pub favorite: bool,

    /// Favorite glyph scale, 1.0 at rest up to 1.2 favorited.
    pub scale: f32,

    /// Entrance progress, 0.0 (absent) to 1.0 (in final position).
    pub entrance: f32,

    /// Whether the card cursor is on this card.
    pub is_cursor: bool,
}

/// Placeholder screen display information.
#[derive(Debug, Clone)]
pub struct PlaceholderInfo {
    /// Centered headline text.
    pub headline: String,
}
