//! Transient request shapes crossing the shortcut bridge.
//!
//! Nothing here is owned, cached, or mutated by the bridge; each value
//! describes exactly one call. The positional layouts are the contract
//! with the native handler and must not be reordered.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::BridgeError;

fn default_true() -> bool {
    true
}

/// A shortcut the application donates to, or presents through, the
/// native voice assistant.
///
/// The `persistent_identifier` must stay stable across donate, present,
/// and remove calls referring to the same logical shortcut; the bridge
/// performs no validation of its own; enforcement is native-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutDescriptor {
    /// Stable key the native side uses to identify, update, or remove
    /// the shortcut.
    pub persistent_identifier: String,
    /// User-visible title, displayed as the name of the shortcut.
    pub title: String,
    /// The phrase the user speaks to invoke the shortcut.
    pub invocation_phrase: String,
    /// Opaque payload returned verbatim when the shortcut is activated.
    #[serde(default)]
    pub user_info: Map<String, Value>,
    /// Whether the shortcut joins the on-device search index.
    #[serde(default = "default_true")]
    pub is_eligible_for_search: bool,
    /// Whether the assistant may suggest the shortcut to the user.
    #[serde(default = "default_true")]
    pub is_eligible_for_prediction: bool,
}

impl ShortcutDescriptor {
    /// Create a descriptor with empty user info and both eligibility
    /// flags on.
    pub fn new(
        persistent_identifier: impl Into<String>,
        title: impl Into<String>,
        invocation_phrase: impl Into<String>,
    ) -> Self {
        Self {
            persistent_identifier: persistent_identifier.into(),
            title: title.into(),
            invocation_phrase: invocation_phrase.into(),
            user_info: Map::new(),
            is_eligible_for_search: true,
            is_eligible_for_prediction: true,
        }
    }

    /// Replace the opaque user-info payload.
    pub fn with_user_info(mut self, user_info: Map<String, Value>) -> Self {
        self.user_info = user_info;
        self
    }

    /// Set search-index eligibility.
    pub fn eligible_for_search(mut self, eligible: bool) -> Self {
        self.is_eligible_for_search = eligible;
        self
    }

    /// Set prediction eligibility.
    pub fn eligible_for_prediction(mut self, eligible: bool) -> Self {
        self.is_eligible_for_prediction = eligible;
        self
    }

    /// The positional argument list in the fixed order the native
    /// handler expects: identifier, title, phrase, user info, search
    /// eligibility, prediction eligibility.
    pub fn to_args(&self) -> Vec<Value> {
        vec![
            Value::String(self.persistent_identifier.clone()),
            Value::String(self.title.clone()),
            Value::String(self.invocation_phrase.clone()),
            Value::Object(self.user_info.clone()),
            Value::Bool(self.is_eligible_for_search),
            Value::Bool(self.is_eligible_for_prediction),
        ]
    }

    /// Decode the positional list produced by [`to_args`].
    ///
    /// This is the native-side boundary codec: handler implementations
    /// use it to recover a descriptor from the raw argument list. Absent
    /// user info decodes to an empty map and absent eligibility flags to
    /// `true`, matching the documented defaults. The façade never calls
    /// this.
    ///
    /// [`to_args`]: ShortcutDescriptor::to_args
    pub fn from_args(args: &[Value]) -> Result<Self, BridgeError> {
        if args.len() != 6 {
            return Err(BridgeError::InvalidArguments {
                reason: format!("expected 6 positional arguments, got {}", args.len()),
            });
        }

        let string_at = |index: usize, field: &str| -> Result<String, BridgeError> {
            args[index]
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| BridgeError::InvalidArguments {
                    reason: format!("argument {index} ({field}) is not a string"),
                })
        };

        let user_info = match &args[3] {
            Value::Object(map) => map.clone(),
            Value::Null => Map::new(),
            other => {
                return Err(BridgeError::InvalidArguments {
                    reason: format!("argument 3 (userInfo) is not an object: {other}"),
                });
            }
        };

        let bool_at = |index: usize, field: &str| -> Result<bool, BridgeError> {
            match &args[index] {
                Value::Bool(b) => Ok(*b),
                Value::Null => Ok(true),
                other => Err(BridgeError::InvalidArguments {
                    reason: format!("argument {index} ({field}) is not a boolean: {other}"),
                }),
            }
        };

        Ok(Self {
            persistent_identifier: string_at(0, "persistentIdentifier")?,
            title: string_at(1, "title")?,
            invocation_phrase: string_at(2, "invocationPhrase")?,
            user_info,
            is_eligible_for_search: bool_at(4, "isEligibleForSearch")?,
            is_eligible_for_prediction: bool_at(5, "isEligibleForPrediction")?,
        })
    }

    /// Native-side check that the required fields are present.
    ///
    /// Rejects an empty identifier, title, or invocation phrase. The
    /// façade forwards descriptors as-is and leaves this to handlers.
    pub fn validate(&self) -> Result<(), BridgeError> {
        for (field, value) in [
            ("persistentIdentifier", &self.persistent_identifier),
            ("title", &self.title),
            ("invocationPhrase", &self.invocation_phrase),
        ] {
            if value.is_empty() {
                return Err(BridgeError::InvalidArguments {
                    reason: format!("{field} must not be empty"),
                });
            }
        }
        Ok(())
    }
}

/// Identifier set for a removal call.
///
/// A bare identifier is normalized to a one-element sequence before it
/// crosses the bridge; a sequence passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalRequest {
    Single(String),
    Many(Vec<String>),
}

impl RemovalRequest {
    /// Normalize into the identifier sequence forwarded to the native
    /// side.
    pub fn into_identifiers(self) -> Vec<String> {
        match self {
            RemovalRequest::Single(id) => vec![id],
            RemovalRequest::Many(ids) => ids,
        }
    }
}

impl From<&str> for RemovalRequest {
    fn from(id: &str) -> Self {
        RemovalRequest::Single(id.to_owned())
    }
}

impl From<String> for RemovalRequest {
    fn from(id: String) -> Self {
        RemovalRequest::Single(id)
    }
}

impl From<Vec<String>> for RemovalRequest {
    fn from(ids: Vec<String>) -> Self {
        RemovalRequest::Many(ids)
    }
}

impl From<&[&str]> for RemovalRequest {
    fn from(ids: &[&str]) -> Self {
        RemovalRequest::Many(ids.iter().map(|id| (*id).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RemovalRequest {
    fn from(ids: [&str; N]) -> Self {
        RemovalRequest::Many(ids.iter().map(|id| (*id).to_owned()).collect())
    }
}

/// Controls whether the native side clears the activated-shortcut
/// record after returning it. The default clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationQuery {
    #[serde(default = "default_true")]
    pub clear: bool,
}

impl ActivationQuery {
    /// Query that leaves the activated record in place.
    pub fn keep() -> Self {
        Self { clear: false }
    }
}

impl Default for ActivationQuery {
    fn default() -> Self {
        Self { clear: true }
    }
}
