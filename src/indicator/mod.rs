//! Gesture status indicator: variant selection, click dispatch, and renderers.
//!
//! Selection is a pure projection of [`DisplayInputs`] onto an [`IndicatorView`].
//! The ANSI banner and the ratatui widget only interpret that descriptor; the
//! injected [`RequestAction`] runs only from an enabled click.

mod action;
mod animation;
mod format;
mod select;
mod state;
mod text;
mod widget;

pub use action::{ClickOutcome, RequestAction, StatusIndicator};
pub use animation::pulse_frame;
pub use format::{format_status_banner, BANNER_HEIGHT};
pub use select::select_view;
pub use state::{
    ButtonPosition, DisplayInputs, DisplayVariant, Emphasis, IndicatorView, StatusBanner,
};
pub use widget::{card_coordinates, IndicatorWidget};
