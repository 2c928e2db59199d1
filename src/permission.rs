//! Camera-permission lifecycle as reported by the caller.
//!
//! The indicator never moves between states on its own. The transition helpers
//! here are for callers (and the demo binary) that model the lifecycle.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::InputError;

/// Current camera-permission state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    /// Not asked yet
    Prompt,
    /// Request in flight
    Requesting,
    /// Camera access granted
    Granted,
    /// Camera access refused
    Denied,
}

impl PermissionState {
    pub const ALL: [PermissionState; 4] = [
        PermissionState::Prompt,
        PermissionState::Requesting,
        PermissionState::Granted,
        PermissionState::Denied,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::Requesting => "requesting",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }

    /// Granted and denied are stable display states.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Granted | Self::Denied)
    }

    /// State after the user asks for camera access.
    #[must_use]
    pub fn on_request(self) -> Self {
        match self {
            Self::Prompt => Self::Requesting,
            other => other,
        }
    }

    /// State after the external permission API settles.
    #[must_use]
    pub fn resolve(self, granted: bool) -> Self {
        match self {
            Self::Requesting if granted => Self::Granted,
            Self::Requesting => Self::Denied,
            other => other,
        }
    }

    /// State after the caller observes a revocation.
    #[must_use]
    pub fn revoke(self) -> Self {
        match self {
            Self::Granted | Self::Denied => Self::Prompt,
            other => other,
        }
    }
}

impl fmt::Display for PermissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PermissionState {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prompt" => Ok(Self::Prompt),
            "requesting" => Ok(Self::Requesting),
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            _ => Err(InputError::UnknownPermission(s.to_string())),
        }
    }
}
