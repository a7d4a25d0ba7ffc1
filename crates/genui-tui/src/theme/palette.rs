//! Color palettes for the light and dark themes.
//!
//! Every widget takes its colors from a [`Palette`] chosen from the current
//! [`ThemeMode`], so a theme toggle restyles the whole screen on the next frame.

use genui_core::ThemeMode;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub deepest_bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    /// Foreground on top of `accent`
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Code view ---
    pub code_fg: Color,
    pub code_tag: Color,
    pub line_number: Color,

    // --- Status ---
    pub success: Color,
    pub error: Color,
    pub info: Color,
    pub keybinding: Color,
}

pub const DARK: Palette = Palette {
    deepest_bg: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    popup_bg: Color::Rgb(28, 33, 43),
    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(88, 166, 255),
    accent: Color::Rgb(88, 166, 255),
    contrast_fg: Color::Rgb(10, 12, 16),
    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),
    code_fg: Color::Rgb(201, 209, 217),
    code_tag: Color::Rgb(129, 140, 248),
    line_number: Color::Rgb(72, 79, 88),
    success: Color::Rgb(16, 185, 129),
    error: Color::Rgb(244, 63, 94),
    info: Color::Rgb(56, 189, 248),
    keybinding: Color::Rgb(234, 179, 8),
};

pub const LIGHT: Palette = Palette {
    deepest_bg: Color::Rgb(246, 248, 250),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(234, 238, 242),
    border_dim: Color::Rgb(208, 215, 222),
    border_active: Color::Rgb(9, 105, 218),
    accent: Color::Rgb(9, 105, 218),
    contrast_fg: Color::Rgb(255, 255, 255),
    text_primary: Color::Rgb(31, 35, 40),
    text_secondary: Color::Rgb(87, 96, 106),
    text_muted: Color::Rgb(140, 149, 159),
    code_fg: Color::Rgb(31, 35, 40),
    code_tag: Color::Rgb(130, 80, 223),
    line_number: Color::Rgb(140, 149, 159),
    success: Color::Rgb(26, 127, 55),
    error: Color::Rgb(207, 34, 46),
    info: Color::Rgb(9, 105, 218),
    keybinding: Color::Rgb(154, 103, 0),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => LIGHT,
        }
    }
}
