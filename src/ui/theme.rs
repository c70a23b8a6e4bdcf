//! Palette management and ANSI escape sequence generation.
//!
//! This module defines the two fixed color palettes the theme switch selects
//! between. Palettes are embedded as TOML and chosen totally from
//! [`ThemeMode`]; there are no intermediate states and no user-supplied
//! palette files. It also provides utilities for converting hex colors to
//! ANSI escape sequences.
//!
//! # TOML Format
//!
//! ```toml
//! name = "light"
//!
//! [colors]
//! text_normal = "#2e3440"
//! text_dim = "#7b8394"
//! border = "#d8dee9"
//! accent = "#bf616a"
//! on_accent = "#fbf6f0"
//! headline_fg = "#4c566a"
//! search_border = "#a3b0c2"
//! image_fg = "#c9d2e0"
//! ```
//!
//! # Example
//!
//! ```rust
//! use forkful::app::ThemeMode;
//! use forkful::ui::Theme;
//!
//! let theme = Theme::for_mode(ThemeMode::Dark);
//! print!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use serde::Deserialize;

use crate::app::modes::ThemeMode;

/// Color scheme for UI rendering.
///
/// One of exactly two built-in palettes, selected by the theme switch.
#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    /// Palette name ("light" or "dark").
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: Palette,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#2e3440").
#[derive(Debug, Clone, Deserialize)]
pub struct Palette {
    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (placeholders, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Accent color: favorited glyph tint, selected chip fill, selected
    /// navigation item.
    pub accent: String,
    /// Text color on accent-filled surfaces.
    pub on_accent: String,

    /// Placeholder screen headline color.
    pub headline_fg: String,

    /// Search box border color.
    pub search_border: String,

    /// Image placeholder strip color.
    pub image_fg: String,
}

impl Theme {
    /// Returns the built-in palette for a theme mode.
    ///
    /// # Panics
    ///
    /// Panics if a built-in palette fails to parse (should never occur).
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        let toml_str = match mode {
            ThemeMode::Light => include_str!("../../themes/light.toml"),
            ThemeMode::Dark => include_str!("../../themes/dark.toml"),
        };

        toml::from_str(toml_str).expect("Built-in palettes should always parse")
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix if present, validates length, and parses hex
    /// digits. Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence.
    ///
    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the light palette, matching the default theme mode.
    fn default() -> Self {
        Self::for_mode(ThemeMode::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_built_in_palettes_parse() {
        assert_eq!(Theme::for_mode(ThemeMode::Light).name, "light");
        assert_eq!(Theme::for_mode(ThemeMode::Dark).name, "dark");
    }

    #[test]
    fn test_default_palette_is_light() {
        assert_eq!(Theme::default().name, "light");
    }

    #[test]
    fn test_hex_to_rgb_falls_back_to_white() {
        assert_eq!(Theme::hex_to_rgb("#2e3440"), (0x2e, 0x34, 0x40));
        assert_eq!(Theme::hex_to_rgb("not-a-color"), (255, 255, 255));
        assert_eq!(Theme::hex_to_rgb("#abc"), (255, 255, 255));
    }

    #[test]
    fn test_fg_emits_truecolor_sequence() {
        assert_eq!(Theme::fg("#000000"), "\u{001b}[38;2;0;0;0m");
    }
}
