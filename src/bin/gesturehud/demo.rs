//! Demo-side caller: owns the inputs and simulates the external permission API.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use gesturehud::config::AppConfig;
use gesturehud::indicator::ButtonPosition;
use gesturehud::{
    log_debug, ClickOutcome, DisplayInputs, GestureKind, IndicatorView, PermissionState,
    RequestAction, StatusIndicator,
};

/// Request capability handed to the indicator. Records requests for the caller to act on.
#[derive(Debug, Clone, Default)]
pub(crate) struct PermissionRequester {
    pending: Rc<Cell<u32>>,
}

impl PermissionRequester {
    fn take(&self) -> u32 {
        self.pending.replace(0)
    }
}

impl RequestAction for PermissionRequester {
    fn request(&self) {
        self.pending.set(self.pending.get() + 1);
        log_debug("camera permission requested");
    }
}

pub(crate) struct DemoApp {
    indicator: StatusIndicator<PermissionRequester>,
    requester: PermissionRequester,
    inputs: DisplayInputs,
    resolve_at: Option<Instant>,
    delay: Duration,
    grant: bool,
    requests: u32,
}

impl DemoApp {
    pub(crate) fn new(config: &AppConfig) -> Self {
        let requester = PermissionRequester::default();
        let inputs = config.display_inputs();
        let delay = Duration::from_millis(config.permission_delay_ms);
        // Starting mid-request: settle it like a request issued at startup.
        let resolve_at = (inputs.permission == PermissionState::Requesting)
            .then(|| Instant::now() + delay);
        Self {
            indicator: StatusIndicator::new(requester.clone(), config.locale),
            requester,
            inputs,
            resolve_at,
            delay,
            grant: config.grants_permission(),
            requests: 0,
        }
    }

    pub(crate) fn inputs(&self) -> DisplayInputs {
        self.inputs
    }

    pub(crate) fn view(&self) -> IndicatorView {
        self.indicator.view(&self.inputs)
    }

    /// Total permission requests issued so far.
    pub(crate) fn requests(&self) -> u32 {
        self.requests
    }

    pub(crate) fn click(&mut self, now: Instant) -> ClickOutcome {
        let outcome = self.indicator.click(&self.inputs);
        self.absorb_requests(now);
        outcome
    }

    pub(crate) fn click_at(
        &mut self,
        button: Option<&ButtonPosition>,
        x: u16,
        row: u16,
        now: Instant,
    ) -> ClickOutcome {
        let outcome = self.indicator.click_at(&self.inputs, button, x, row);
        self.absorb_requests(now);
        outcome
    }

    fn absorb_requests(&mut self, now: Instant) {
        let issued = self.requester.take();
        if issued == 0 {
            return;
        }
        self.requests += issued;
        let next = self.inputs.permission.on_request();
        tracing::info!(from = %self.inputs.permission, to = %next, "permission requested");
        self.inputs.permission = next;
        self.resolve_at = Some(now + self.delay);
    }

    /// Settle an in-flight request once its delay has elapsed. Returns true on change.
    pub(crate) fn tick(&mut self, now: Instant) -> bool {
        match self.resolve_at {
            Some(deadline) if now >= deadline => {
                self.resolve_at = None;
                let next = self.inputs.permission.resolve(self.grant);
                tracing::info!(from = %self.inputs.permission, to = %next, "permission resolved");
                log_debug(&format!("permission resolved: {next}"));
                let changed = next != self.inputs.permission;
                self.inputs.permission = next;
                changed
            }
            _ => false,
        }
    }

    pub(crate) fn set_gesture(&mut self, gesture: GestureKind) {
        self.inputs.gesture = gesture;
    }

    pub(crate) fn toggle_tracking(&mut self) {
        self.inputs.is_tracking = !self.inputs.is_tracking;
    }

    pub(crate) fn toggle_mouse(&mut self) {
        self.inputs.using_mouse = !self.inputs.using_mouse;
    }

    /// Model a revocation: settled states go back to prompt.
    pub(crate) fn revoke(&mut self) {
        if self.inputs.permission.is_terminal() {
            self.inputs.permission = self.inputs.permission.revoke();
            self.resolve_at = None;
        }
    }

    pub(crate) fn permission(&self) -> PermissionState {
        self.inputs.permission
    }
}
