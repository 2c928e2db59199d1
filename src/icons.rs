//! Icon vocabulary for the gesture indicator.
//!
//! Provides Unicode and ASCII fallback glyphs for every icon the indicator shows.

use serde::Serialize;

use crate::gesture::GestureKind;

/// Logical icon chosen by the view selection. Renderers turn it into a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorIcon {
    Circle,
    Grab,
    Hand,
    MousePointer,
    Camera,
    AlertCircle,
}

impl IndicatorIcon {
    /// Icon for a recognized gesture.
    pub fn for_gesture(gesture: GestureKind) -> Self {
        match gesture {
            GestureKind::None => Self::Circle,
            GestureKind::Fist => Self::Grab,
            GestureKind::Open => Self::Hand,
            GestureKind::Pinch => Self::MousePointer,
            GestureKind::Pointing => Self::MousePointer,
        }
    }
}

/// Collection of glyphs used by the renderers.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    /// No hand / detecting
    pub circle: &'static str,
    /// Closed fist
    pub grab: &'static str,
    /// Open palm
    pub hand: &'static str,
    /// Pointer (mouse mode, pinch, pointing)
    pub mouse_pointer: &'static str,
    /// Camera call-to-action
    pub camera: &'static str,
    /// Permission refused
    pub alert: &'static str,
    /// Liveness marker frames, cycled while tracking
    pub pulse: &'static [&'static str],
}

impl IconSet {
    pub fn glyph(&self, icon: IndicatorIcon) -> &'static str {
        match icon {
            IndicatorIcon::Circle => self.circle,
            IndicatorIcon::Grab => self.grab,
            IndicatorIcon::Hand => self.hand,
            IndicatorIcon::MousePointer => self.mouse_pointer,
            IndicatorIcon::Camera => self.camera,
            IndicatorIcon::AlertCircle => self.alert,
        }
    }
}

/// Unicode icon set for terminals with full Unicode support.
pub static UNICODE_ICONS: IconSet = IconSet {
    circle: "○",
    grab: "✊",
    hand: "✋",
    mouse_pointer: "➚",
    camera: "◙",
    alert: "⚠",
    pulse: &["●", "◉", "●", "◌"],
};

/// ASCII icon set for terminals without Unicode support.
pub static ASCII_ICONS: IconSet = IconSet {
    circle: "o",
    grab: "#",
    hand: "%",
    mouse_pointer: "^",
    camera: "[@]",
    alert: "!",
    pulse: &["*", "+", "*", "."],
};

/// Select the appropriate icon set based on Unicode support.
pub fn get_icons(unicode: bool) -> &'static IconSet {
    if unicode {
        &UNICODE_ICONS
    } else {
        &ASCII_ICONS
    }
}
