//! # Shortcuts Core
//!
//! Data model and contracts for the Siri shortcut bridge: the transient
//! request shapes that cross the bridge, the native response-code
//! vocabulary, error types, and layered configuration.
//!
//! The bridge façade itself lives in `shortcuts-bridge`; native handler
//! implementations depend on this crate for the positional boundary
//! codec and response codes.

pub mod config;
pub mod error;
pub mod response;
pub mod types;

// Re-export commonly used types at the crate root.
pub use config::{ActivationDefaults, BridgeConfig, DescriptorDefaults};
pub use error::{BridgeError, ConfigError};
pub use response::ResponseCode;
pub use types::{ActivationQuery, RemovalRequest, ShortcutDescriptor};
