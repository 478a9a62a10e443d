//! Native response vocabulary.
//!
//! The native shortcut engine reports every outcome as a numeric code
//! plus a human-readable message. Codes 0–5 are successes, 6–10 are
//! errors. The bridge uses the error half to synthesize payloads for
//! failures it detects locally (no handler registered, handler dropped
//! its responder); native handlers use the success half.

use serde_json::{Value, json};
use std::fmt;

/// Result codes reported by the native shortcut engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    // Success
    Donated = 0,
    Added = 1,
    Updated = 2,
    Deleted = 3,
    ActivatedShortcut = 4,
    AllShortcuts = 5,
    // Error
    Canceled = 6,
    InvalidArguments = 7,
    NoSiriShortcuts = 8,
    InternalError = 9,
    NoShortcutActivated = 10,
}

impl ResponseCode {
    /// The numeric code crossing the bridge.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Whether this code reports a successful outcome.
    pub fn is_success(self) -> bool {
        self.code() <= 5
    }

    /// Human-readable description of the outcome.
    pub fn description(self) -> &'static str {
        match self {
            ResponseCode::Donated => "Siri shortcut was donated",
            ResponseCode::Added => "Siri shortcut was added",
            ResponseCode::Updated => "Siri shortcut was updated",
            ResponseCode::Deleted => "Siri shortcut was deleted",
            ResponseCode::ActivatedShortcut => "Activated Siri shortcut was fetched",
            ResponseCode::AllShortcuts => "All Siri shortcuts were fetched",
            ResponseCode::Canceled => "Siri shortcut activity was canceled",
            ResponseCode::InvalidArguments => "Invalid arguments",
            ResponseCode::NoSiriShortcuts => {
                "Siri shortcuts is not available, user might not run iOS 12+"
            }
            ResponseCode::InternalError => "An internal error occurred",
            ResponseCode::NoShortcutActivated => "No Siri shortcut was activated",
        }
    }

    /// Payload shape the native engine uses to report this code.
    pub fn payload(self) -> Value {
        json!({
            "code": self.code(),
            "message": self.description(),
        })
    }

    /// Look up a code received from the native side.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ResponseCode::Donated),
            1 => Some(ResponseCode::Added),
            2 => Some(ResponseCode::Updated),
            3 => Some(ResponseCode::Deleted),
            4 => Some(ResponseCode::ActivatedShortcut),
            5 => Some(ResponseCode::AllShortcuts),
            6 => Some(ResponseCode::Canceled),
            7 => Some(ResponseCode::InvalidArguments),
            8 => Some(ResponseCode::NoSiriShortcuts),
            9 => Some(ResponseCode::InternalError),
            10 => Some(ResponseCode::NoShortcutActivated),
            _ => None,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.code())
    }
}
