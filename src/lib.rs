pub mod config;
pub mod error;
pub mod gesture;
pub mod icons;
pub mod indicator;
pub mod labels;
mod logging;
pub mod permission;
mod telemetry;
pub mod terminal_restore;
pub mod theme;

pub use error::InputError;
pub use gesture::GestureKind;
pub use indicator::{
    ClickOutcome, DisplayInputs, DisplayVariant, Emphasis, IndicatorView, RequestAction,
    StatusIndicator,
};
pub use labels::Locale;
pub use logging::{
    crash_log_path, init_logging, log_debug, log_debug_content, log_file_path, log_panic,
};
pub use permission::PermissionState;
