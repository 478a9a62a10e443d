//! Error types for the shortcut bridge.
//!
//! Uses `thiserror` for public API error types. The bridge itself has a
//! single real failure mode (the native handler rejected the call) and
//! carries the native error payload through opaque and unmodified. The
//! remaining variants cover registration, local dispatch failures, and
//! configuration.

use serde_json::Value;

/// Top-level error type for the shortcut bridge.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The native handler rejected the call. The payload is defined
    /// entirely by the native side and is never inspected here.
    #[error("native '{action}' call failed: {payload}")]
    Native { action: String, payload: Value },

    /// No handler is registered under the requested plugin name.
    #[error("no handler registered for plugin '{plugin}'")]
    HandlerNotFound { plugin: String },

    /// A handler is already registered under this plugin name.
    #[error("handler already registered for plugin '{plugin}'")]
    AlreadyRegistered { plugin: String },

    /// The native handler dropped its responder without answering.
    #[error("native '{action}' call was dropped without a response")]
    NoResponse { action: String },

    /// A positional argument list could not be decoded into a shortcut
    /// descriptor. Reported by native-side decoding, never by the façade.
    #[error("invalid shortcut arguments: {reason}")]
    InvalidArguments { reason: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from the configuration system.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Extraction from the layered sources failed.
    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Invalid {
            message: err.to_string(),
        }
    }
}
