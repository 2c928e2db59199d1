use ratatui::style::Color;

use super::{ThemeColors, BORDER_ROUNDED, BORDER_SINGLE};

/// Gold theme - warm gold card with green tracking and red denial accents (default)
pub const THEME_GOLD: ThemeColors = ThemeColors {
    accent: "\x1b[38;2;212;175;55m",    // Gold #d4af37
    active: "\x1b[38;2;46;160;67m",     // Pine green #2ea043
    highlight: "\x1b[38;2;248;250;252m", // Snow #f8fafc
    error: "\x1b[38;2;200;48;48m",      // Holly red #c83030
    text: "\x1b[38;2;236;232;220m",     // Warm white #ece8dc
    dim: "\x1b[38;2;138;132;120m",      // Muted #8a8478
    border: "\x1b[38;2;212;175;55m",    // Gold #d4af37
    reset: "\x1b[0m",
    borders: BORDER_ROUNDED,
};

/// ANSI 16-color fallback for older terminals
pub const THEME_ANSI: ThemeColors = ThemeColors {
    accent: "\x1b[33m",    // Yellow
    active: "\x1b[32m",    // Green
    highlight: "\x1b[97m", // Bright white
    error: "\x1b[31m",     // Red
    text: "\x1b[37m",      // White
    dim: "\x1b[90m",       // Dark gray (bright black)
    border: "\x1b[33m",    // Yellow
    reset: "\x1b[0m",
    borders: BORDER_SINGLE,
};

/// No colors - plain text output
pub const THEME_NONE: ThemeColors = ThemeColors {
    accent: "",
    active: "",
    highlight: "",
    error: "",
    text: "",
    dim: "",
    border: "",
    reset: "",
    borders: BORDER_SINGLE,
};

/// ratatui colors matching [`THEME_GOLD`].
pub(super) const PALETTE_GOLD: Palette = Palette {
    accent: Color::Rgb(212, 175, 55),
    active: Color::Rgb(46, 160, 67),
    highlight: Color::Rgb(248, 250, 252),
    error: Color::Rgb(200, 48, 48),
    text: Color::Rgb(236, 232, 220),
    dim: Color::Rgb(138, 132, 120),
    border: Color::Rgb(212, 175, 55),
};

pub(super) const PALETTE_ANSI: Palette = Palette {
    accent: Color::Yellow,
    active: Color::Green,
    highlight: Color::White,
    error: Color::Red,
    text: Color::Gray,
    dim: Color::DarkGray,
    border: Color::Yellow,
};

pub(super) const PALETTE_NONE: Palette = Palette {
    accent: Color::Reset,
    active: Color::Reset,
    highlight: Color::Reset,
    error: Color::Reset,
    text: Color::Reset,
    dim: Color::Reset,
    border: Color::Reset,
};

/// Terminal colors for the ratatui renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub active: Color,
    pub highlight: Color,
    pub error: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
}
