//! # Shortcuts Bridge
//!
//! Bridge façade exposing native Siri shortcut donation and management
//! to an embedding application runtime. Every operation packages a
//! positional argument list, forwards it to the native handler
//! registered under the fixed plugin name, and relays the opaque
//! success/error outcome back through an optional callback pair and the
//! returned future, both settled by the same single native response.
//!
//! The native engine itself (persistence, the on-device search index,
//! voice-phrase matching) is an external collaborator behind the
//! [`ShortcutHandler`] trait.
//!
//! ```no_run
//! use shortcuts_bridge::{
//!     BridgeRegistry, OutcomeCallbacks, PLUGIN_NAME, ShortcutDescriptor, SiriShortcuts,
//! };
//! use std::sync::Arc;
//!
//! # async fn example(handler: Arc<dyn shortcuts_bridge::ShortcutHandler>) -> Result<(), shortcuts_bridge::BridgeError> {
//! let mut registry = BridgeRegistry::new();
//! registry.register(PLUGIN_NAME, handler)?;
//!
//! let shortcuts = SiriShortcuts::new(Arc::new(registry));
//! let descriptor = ShortcutDescriptor::new("order-coffee", "Order Coffee", "Coffee time");
//! let outcome = shortcuts.donate(&descriptor, OutcomeCallbacks::new()).await?;
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod handler;
pub mod outcome;
pub mod registry;
pub mod shortcuts;

// Re-export commonly used types at the crate root.
pub use action::Action;
pub use handler::ShortcutHandler;
pub use outcome::{ErrorCallback, OutcomeCallbacks, OutcomeFuture, Responder, SuccessCallback};
pub use registry::{BridgeRegistry, HandlerState};
pub use shortcuts::{PLUGIN_NAME, SiriShortcuts};

// Shared contracts from the core crate.
pub use shortcuts_core::{
    ActivationQuery, BridgeConfig, BridgeError, RemovalRequest, ResponseCode, ShortcutDescriptor,
};
