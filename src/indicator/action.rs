//! Click dispatch: the one place the indicator reaches outward.

use crate::labels::Locale;

use super::select::select_view;
use super::state::{ButtonPosition, DisplayInputs, IndicatorView};

/// Capability that asks the external permission subsystem for camera access.
pub trait RequestAction {
    fn request(&self);
}

impl<F: Fn()> RequestAction for F {
    fn request(&self) {
        self()
    }
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The request capability ran once
    Requested,
    /// The affordance is shown but a request is already in flight
    Disabled,
    /// The current view has no affordance
    Inert,
    /// The pointer landed outside the affordance
    Missed,
}

/// Status indicator bound to an injected request capability.
pub struct StatusIndicator<A> {
    action: A,
    locale: Locale,
}

impl<A: RequestAction> StatusIndicator<A> {
    pub fn new(action: A, locale: Locale) -> Self {
        Self { action, locale }
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    /// Rendering decision for the current inputs. Never invokes the capability.
    pub fn view(&self, inputs: &DisplayInputs) -> IndicatorView {
        select_view(inputs, self.locale.labels())
    }

    /// Apply one discrete user click to the affordance.
    pub fn click(&self, inputs: &DisplayInputs) -> ClickOutcome {
        let outcome = match self.view(inputs) {
            IndicatorView::RequestPrompt { enabled: true, .. } => {
                self.action.request();
                ClickOutcome::Requested
            }
            IndicatorView::RequestPrompt { enabled: false, .. } => ClickOutcome::Disabled,
            IndicatorView::Denied { .. } | IndicatorView::ActiveStatus { .. } => {
                ClickOutcome::Inert
            }
        };
        tracing::debug!(
            permission = %inputs.permission,
            outcome = ?outcome,
            "indicator click"
        );
        outcome
    }

    /// Apply a pointer click at card coordinates (1-based column and row).
    pub fn click_at(
        &self,
        inputs: &DisplayInputs,
        button: Option<&ButtonPosition>,
        x: u16,
        row: u16,
    ) -> ClickOutcome {
        match button {
            Some(button) if button.contains(x, row) => self.click(inputs),
            Some(_) => ClickOutcome::Missed,
            None => match self.view(inputs) {
                IndicatorView::RequestPrompt { enabled: true, .. } => ClickOutcome::Missed,
                IndicatorView::RequestPrompt { enabled: false, .. } => ClickOutcome::Disabled,
                IndicatorView::Denied { .. } | IndicatorView::ActiveStatus { .. } => {
                    ClickOutcome::Inert
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GestureKind;
    use crate::permission::PermissionState;
    use std::cell::Cell;

    fn inputs(permission: PermissionState) -> DisplayInputs {
        DisplayInputs::new(GestureKind::Fist, true, false, permission)
    }

    #[test]
    fn prompt_click_requests_exactly_once() {
        let calls = Cell::new(0);
        let indicator = StatusIndicator::new(|| calls.set(calls.get() + 1), Locale::En);
        assert_eq!(
            indicator.click(&inputs(PermissionState::Prompt)),
            ClickOutcome::Requested
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn each_enabled_click_requests_again() {
        let calls = Cell::new(0);
        let indicator = StatusIndicator::new(|| calls.set(calls.get() + 1), Locale::En);
        let prompt = inputs(PermissionState::Prompt);
        indicator.click(&prompt);
        indicator.click(&prompt);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn requesting_click_is_disabled() {
        let calls = Cell::new(0);
        let indicator = StatusIndicator::new(|| calls.set(calls.get() + 1), Locale::En);
        for _ in 0..3 {
            assert_eq!(
                indicator.click(&inputs(PermissionState::Requesting)),
                ClickOutcome::Disabled
            );
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn denied_and_granted_clicks_are_inert() {
        let calls = Cell::new(0);
        let indicator = StatusIndicator::new(|| calls.set(calls.get() + 1), Locale::En);
        for permission in [PermissionState::Denied, PermissionState::Granted] {
            for using_mouse in [false, true] {
                let inputs = DisplayInputs::new(GestureKind::Open, true, using_mouse, permission);
                assert_eq!(indicator.click(&inputs), ClickOutcome::Inert);
                for (x, row) in [(1, 1), (10, 2), (40, 4)] {
                    assert_eq!(
                        indicator.click_at(&inputs, None, x, row),
                        ClickOutcome::Inert
                    );
                }
            }
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn rendering_never_invokes_action() {
        let calls = Cell::new(0);
        let indicator = StatusIndicator::new(|| calls.set(calls.get() + 1), Locale::ZhCn);
        for permission in PermissionState::ALL {
            let _ = indicator.view(&inputs(permission));
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn view_uses_the_bound_locale() {
        let prompt = inputs(PermissionState::Prompt);
        let zh = StatusIndicator::new(|| {}, Locale::ZhCn).view(&prompt);
        let en = StatusIndicator::new(|| {}, Locale::En).view(&prompt);
        assert!(matches!(zh, IndicatorView::RequestPrompt { title: "启用手势控制", .. }));
        assert!(matches!(en, IndicatorView::RequestPrompt { title: "Enable gesture control", .. }));
    }

    #[test]
    fn click_at_hit_tests_the_affordance() {
        let calls = Cell::new(0);
        let indicator = StatusIndicator::new(|| calls.set(calls.get() + 1), Locale::En);
        let prompt = inputs(PermissionState::Prompt);
        let button = indicator.view(&prompt).button_position(30, 4);
        assert_eq!(
            indicator.click_at(&prompt, button.as_ref(), 31, 2),
            ClickOutcome::Missed
        );
        assert_eq!(calls.get(), 0);
        assert_eq!(
            indicator.click_at(&prompt, button.as_ref(), 12, 2),
            ClickOutcome::Requested
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn click_at_while_requesting_has_no_region() {
        let calls = Cell::new(0);
        let indicator = StatusIndicator::new(|| calls.set(calls.get() + 1), Locale::En);
        let requesting = inputs(PermissionState::Requesting);
        let button = indicator.view(&requesting).button_position(30, 4);
        assert!(button.is_none());
        assert_eq!(
            indicator.click_at(&requesting, button.as_ref(), 5, 2),
            ClickOutcome::Disabled
        );
        assert_eq!(calls.get(), 0);
    }

    struct Spy {
        calls: Cell<usize>,
    }

    impl RequestAction for Spy {
        fn request(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[test]
    fn struct_capability() {
        let indicator = StatusIndicator::new(
            Spy {
                calls: Cell::new(0),
            },
            Locale::En,
        );
        indicator.click(&inputs(PermissionState::Prompt));
        indicator.click(&inputs(PermissionState::Requesting));
        indicator.click(&inputs(PermissionState::Denied));
        assert_eq!(indicator.action().calls.get(), 1);
    }
}
