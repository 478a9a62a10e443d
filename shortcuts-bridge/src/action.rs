//! The fixed action vocabulary of the shortcut bridge.
//!
//! Each façade operation targets exactly one action name; the names are
//! part of the native contract and must not change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six operations the native handler understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Donate a shortcut to the native index.
    Donate,
    /// Present the native setup flow for a shortcut.
    Present,
    /// Remove shortcuts by persistent identifier.
    Remove,
    /// Remove every shortcut donated by this application.
    RemoveAll,
    /// Fetch the shortcut the user most recently activated.
    GetActivatedShortcut,
    /// Fetch all shortcuts known to the native side.
    GetAllShortcuts,
}

impl Action {
    /// Every action, in table order.
    pub const ALL: [Action; 6] = [
        Action::Donate,
        Action::Present,
        Action::Remove,
        Action::RemoveAll,
        Action::GetActivatedShortcut,
        Action::GetAllShortcuts,
    ];

    /// The fixed wire name of this action.
    pub fn name(self) -> &'static str {
        match self {
            Action::Donate => "donate",
            Action::Present => "present",
            Action::Remove => "remove",
            Action::RemoveAll => "removeAll",
            Action::GetActivatedShortcut => "getActivatedShortcut",
            Action::GetAllShortcuts => "getAllShortcuts",
        }
    }

    /// Look up an action by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
