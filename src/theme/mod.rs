//! Color themes for the indicator card.
//!
//! Each theme carries ANSI escapes for the banner renderer and a matching
//! ratatui palette for the interactive widget.

mod borders;
mod palettes;

use std::fmt;
use std::str::FromStr;

pub use borders::{BorderSet, BORDER_ASCII, BORDER_ROUNDED, BORDER_SINGLE};
pub use palettes::{Palette, THEME_ANSI, THEME_GOLD, THEME_NONE};

use self::palettes::{PALETTE_ANSI, PALETTE_GOLD, PALETTE_NONE};
use crate::error::InputError;

/// ANSI color codes for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// Call-to-action accent
    pub accent: &'static str,
    /// Tracking emphasis and liveness marker
    pub active: &'static str,
    /// Icon color while tracking
    pub highlight: &'static str,
    /// Denied state
    pub error: &'static str,
    /// Primary text
    pub text: &'static str,
    /// Secondary captions and muted icons
    pub dim: &'static str,
    /// Card border
    pub border: &'static str,
    /// Reset code
    pub reset: &'static str,
    pub borders: BorderSet,
}

/// Available color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Gold,
    /// ANSI 16-color fallback
    Ansi,
    /// No colors - plain text
    None,
}

impl Theme {
    /// Parse theme name from string.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "gold" | "default" | "christmas" => Some(Self::Gold),
            "ansi" | "ansi16" | "basic" => Some(Self::Ansi),
            "none" | "plain" => Some(Self::None),
            _ => None,
        }
    }

    pub fn colors(&self) -> ThemeColors {
        match self {
            Self::Gold => THEME_GOLD,
            Self::Ansi => THEME_ANSI,
            Self::None => THEME_NONE,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Gold => PALETTE_GOLD,
            Self::Ansi => PALETTE_ANSI,
            Self::None => PALETTE_NONE,
        }
    }

    pub fn available() -> &'static [&'static str] {
        &["gold", "ansi", "none"]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gold => write!(f, "gold"),
            Self::Ansi => write!(f, "ansi"),
            Self::None => write!(f, "none"),
        }
    }
}

impl FromStr for Theme {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| InputError::UnknownTheme(s.to_string()))
    }
}
