//! Boundary errors for values handed to the indicator by callers.

use thiserror::Error;

/// An input name that does not belong to one of the closed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown gesture '{0}' (expected none, fist, open, pinch, pointing)")]
    UnknownGesture(String),
    #[error("unknown permission state '{0}' (expected prompt, requesting, granted, denied)")]
    UnknownPermission(String),
    #[error("unknown locale '{0}' (expected zh-cn or en)")]
    UnknownLocale(String),
    #[error("unknown theme '{0}' (expected gold, ansi, none)")]
    UnknownTheme(String),
}
