//! Variant selection: permission state first, then input mode and tracking.

use crate::icons::IndicatorIcon;
use crate::labels::Labels;
use crate::permission::PermissionState;

use super::state::{DisplayInputs, Emphasis, IndicatorView};

/// Project the caller's inputs onto exactly one view.
pub fn select_view(inputs: &DisplayInputs, labels: &Labels) -> IndicatorView {
    match inputs.permission {
        PermissionState::Prompt | PermissionState::Requesting => {
            let requesting = inputs.permission == PermissionState::Requesting;
            IndicatorView::RequestPrompt {
                icon: IndicatorIcon::Camera,
                title: if requesting {
                    labels.requesting_title
                } else {
                    labels.request_title
                },
                hint: labels.request_hint,
                enabled: !requesting,
            }
        }
        PermissionState::Denied => IndicatorView::Denied {
            icon: IndicatorIcon::AlertCircle,
            title: labels.denied_title,
            hint: labels.denied_hint,
        },
        PermissionState::Granted => active_status(inputs, labels),
    }
}

fn active_status(inputs: &DisplayInputs, labels: &Labels) -> IndicatorView {
    let (icon, label) = if inputs.using_mouse {
        (IndicatorIcon::MousePointer, labels.mouse_label)
    } else {
        (
            IndicatorIcon::for_gesture(inputs.gesture),
            labels.gesture(inputs.gesture),
        )
    };
    let caption = if inputs.using_mouse {
        labels.mouse_caption
    } else if inputs.is_tracking {
        labels.tracking_caption
    } else {
        labels.waiting_caption
    };
    IndicatorView::ActiveStatus {
        icon,
        label,
        caption,
        emphasis: if inputs.is_tracking {
            Emphasis::Highlighted
        } else {
            Emphasis::Muted
        },
        liveness: inputs.is_tracking,
    }
}
