//! Command-line parsing and validation helpers.

mod defaults;
mod validation;

use clap::builder::BoolishValueParser;
use clap::Parser;

pub use defaults::{
    DEFAULT_PERMISSION_DELAY_MS, DEFAULT_WIDTH, MAX_PERMISSION_DELAY_MS, MAX_WIDTH, MIN_WIDTH,
};

use crate::gesture::GestureKind;
use crate::indicator::DisplayInputs;
use crate::labels::Locale;
use crate::permission::PermissionState;
use crate::theme::Theme;

/// CLI options for the gesture indicator demo.
#[derive(Debug, Parser, Clone)]
#[command(about = "Gesture HUD - camera gesture status indicator", author, version)]
pub struct AppConfig {
    /// Gesture reported by the recognizer (none, fist, open, pinch, pointing)
    #[arg(long, default_value = "none")]
    pub gesture: GestureKind,

    /// Gesture tracking is locked on
    #[arg(long = "tracking", default_value_t = false)]
    pub tracking: bool,

    /// Mouse fallback is the active input mode
    #[arg(long = "mouse", default_value_t = false)]
    pub mouse: bool,

    /// Camera permission state (prompt, requesting, granted, denied)
    #[arg(long, default_value = "prompt")]
    pub permission: PermissionState,

    /// Indicator text language (zh-cn, en)
    #[arg(long, env = "GESTUREHUD_LOCALE", default_value = "zh-cn")]
    pub locale: Locale,

    /// Color theme (gold, ansi, none)
    #[arg(long, default_value = "gold")]
    pub theme: Theme,

    /// Use ASCII glyphs and borders instead of Unicode
    #[arg(long = "ascii", default_value_t = false)]
    pub ascii: bool,

    /// Card width in terminal columns
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Render once to stdout and exit instead of running the interactive view
    #[arg(long = "once", default_value_t = false)]
    pub once: bool,

    /// Print the view descriptor as JSON (implies --once)
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,

    /// Apply one click to the indicator before rendering (requires --once)
    #[arg(long = "click", default_value_t = false)]
    pub click: bool,

    /// Delay before the simulated permission request settles (milliseconds)
    #[arg(long = "permission-delay-ms", default_value_t = DEFAULT_PERMISSION_DELAY_MS)]
    pub permission_delay_ms: u64,

    /// Simulated permission request is granted (default)
    #[arg(long = "grant", default_value_t = false)]
    pub grant: bool,

    /// Simulated permission request is denied
    #[arg(long = "deny", default_value_t = false)]
    pub deny: bool,

    /// Enable file logging (debug)
    #[arg(
        long = "logs",
        env = "GESTUREHUD_LOGS",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(
        long = "no-logs",
        env = "GESTUREHUD_NO_LOGS",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    pub no_logs: bool,

    /// Allow logging label text and panic payloads (debug log only)
    #[arg(
        long = "log-content",
        env = "GESTUREHUD_LOG_CONTENT",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    pub log_content: bool,
}

impl AppConfig {
    /// Indicator inputs described by the command line.
    pub fn display_inputs(&self) -> DisplayInputs {
        DisplayInputs::new(self.gesture, self.tracking, self.mouse, self.permission)
    }

    /// Outcome of the simulated permission request.
    pub fn grants_permission(&self) -> bool {
        !self.deny
    }

    pub fn unicode(&self) -> bool {
        !self.ascii
    }
}
