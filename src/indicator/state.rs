//! Indicator inputs and the view descriptor the renderers interpret.

use serde::Serialize;

use crate::gesture::GestureKind;
use crate::icons::IndicatorIcon;
use crate::permission::PermissionState;

/// Recognition state supplied by the caller on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayInputs {
    pub gesture: GestureKind,
    /// Tracking is locked on to a hand
    pub is_tracking: bool,
    /// Mouse fallback is the active input mode
    pub using_mouse: bool,
    pub permission: PermissionState,
}

impl DisplayInputs {
    pub fn new(
        gesture: GestureKind,
        is_tracking: bool,
        using_mouse: bool,
        permission: PermissionState,
    ) -> Self {
        Self {
            gesture,
            is_tracking,
            using_mouse,
            permission,
        }
    }
}

/// Icon container treatment in the active-status variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Tracking is active
    Highlighted,
    Muted,
}

/// Which of the three variants a view belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayVariant {
    PermissionRequest,
    Denied,
    ActiveStatus,
}

/// Rendering decision for one render cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
#[must_use = "IndicatorView describes what to render"]
pub enum IndicatorView {
    /// Call-to-action bound to the request capability
    RequestPrompt {
        icon: IndicatorIcon,
        title: &'static str,
        hint: &'static str,
        enabled: bool,
    },
    /// Camera refused; informational only
    Denied {
        icon: IndicatorIcon,
        title: &'static str,
        hint: &'static str,
    },
    /// Live gesture status; informational only
    ActiveStatus {
        icon: IndicatorIcon,
        label: &'static str,
        caption: &'static str,
        emphasis: Emphasis,
        liveness: bool,
    },
}

impl IndicatorView {
    pub fn variant(&self) -> DisplayVariant {
        match self {
            Self::RequestPrompt { .. } => DisplayVariant::PermissionRequest,
            Self::Denied { .. } => DisplayVariant::Denied,
            Self::ActiveStatus { .. } => DisplayVariant::ActiveStatus,
        }
    }

    pub fn icon(&self) -> IndicatorIcon {
        match self {
            Self::RequestPrompt { icon, .. }
            | Self::Denied { icon, .. }
            | Self::ActiveStatus { icon, .. } => *icon,
        }
    }

    /// True only for an enabled call-to-action.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::RequestPrompt { enabled: true, .. })
    }

    /// Clickable region of a card `width` x `height` cells, if the view has one.
    ///
    /// The whole card is the affordance, matching a button that wraps its content.
    pub fn button_position(&self, width: u16, height: u16) -> Option<ButtonPosition> {
        if !self.is_interactive() || width == 0 || height == 0 {
            return None;
        }
        Some(ButtonPosition {
            start_x: 1,
            end_x: width,
            start_row: 1,
            end_row: height,
        })
    }
}

/// A clickable region of a rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPosition {
    /// Start column (1-based, inclusive)
    pub start_x: u16,
    /// End column (1-based, inclusive)
    pub end_x: u16,
    /// First row from the top of the card (1-based, inclusive)
    pub start_row: u16,
    /// Last row (1-based, inclusive)
    pub end_row: u16,
}

impl ButtonPosition {
    pub fn contains(&self, x: u16, row: u16) -> bool {
        (self.start_x..=self.end_x).contains(&x) && (self.start_row..=self.end_row).contains(&row)
    }
}

/// Multi-row banner output.
#[derive(Debug, Clone)]
#[must_use = "StatusBanner contains the formatted output to display"]
pub struct StatusBanner {
    /// Individual lines to render (top to bottom)
    pub lines: Vec<String>,
    /// Clickable affordance, present only for an enabled request
    pub button: Option<ButtonPosition>,
}

impl StatusBanner {
    pub fn new(lines: Vec<String>, button: Option<ButtonPosition>) -> Self {
        Self { lines, button }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(enabled: bool) -> IndicatorView {
        IndicatorView::RequestPrompt {
            icon: IndicatorIcon::Camera,
            title: "t",
            hint: "h",
            enabled,
        }
    }

    #[test]
    fn only_enabled_request_is_interactive() {
        assert!(request(true).is_interactive());
        assert!(!request(false).is_interactive());
        let denied = IndicatorView::Denied {
            icon: IndicatorIcon::AlertCircle,
            title: "t",
            hint: "h",
        };
        assert!(!denied.is_interactive());
        assert!(denied.button_position(20, 4).is_none());
    }

    #[test]
    fn button_position_covers_card() {
        let button = request(true).button_position(30, 4).expect("button");
        assert!(button.contains(1, 1));
        assert!(button.contains(30, 4));
        assert!(!button.contains(31, 2));
        assert!(!button.contains(5, 5));
        assert!(!button.contains(0, 1));
        assert!(request(false).button_position(30, 4).is_none());
    }

    #[test]
    fn view_serializes_with_variant_tag() {
        let view = IndicatorView::ActiveStatus {
            icon: IndicatorIcon::Hand,
            label: "Open hand - galaxy",
            caption: "Gesture recognized",
            emphasis: Emphasis::Highlighted,
            liveness: true,
        };
        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json["variant"], "active_status");
        assert_eq!(json["icon"], "hand");
        assert_eq!(json["emphasis"], "highlighted");
        assert_eq!(json["liveness"], true);
    }
}
