//! Gesture classes reported by the external recognizer.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::InputError;

/// Recognized gesture class. Exactly one is active per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    /// No hand detected yet
    None,
    /// Closed fist
    Fist,
    /// Open palm
    Open,
    /// Thumb and index pinched together
    Pinch,
    /// Index finger extended
    Pointing,
}

impl GestureKind {
    /// Every gesture, in recognizer order.
    pub const ALL: [GestureKind; 5] = [
        GestureKind::None,
        GestureKind::Fist,
        GestureKind::Open,
        GestureKind::Pinch,
        GestureKind::Pointing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fist => "fist",
            Self::Open => "open",
            Self::Pinch => "pinch",
            Self::Pointing => "pointing",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GestureKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "fist" => Ok(Self::Fist),
            "open" => Ok(Self::Open),
            "pinch" => Ok(Self::Pinch),
            "pointing" => Ok(Self::Pointing),
            _ => Err(InputError::UnknownGesture(s.to_string())),
        }
    }
}
