//! Handler registry and call dispatch.
//!
//! Maps plugin names to native handlers and turns each façade call into
//! one spawned handler invocation. Handlers are registered at startup.
//! Dispatch never blocks the caller; the returned future is the only
//! suspension point.

use chrono::{DateTime, Utc};
use serde_json::Value;
use shortcuts_core::{BridgeError, ResponseCode};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::action::Action;
use crate::handler::{ShortcutHandler, dispatch};
use crate::outcome::{OutcomeCallbacks, OutcomeFuture, Responder};

/// Registration record for a native handler.
#[derive(Debug, Clone)]
pub struct HandlerState {
    /// The plugin name the handler answers to.
    pub plugin: String,
    /// When the handler was registered.
    pub registered_at: DateTime<Utc>,
}

struct HandlerEntry {
    handler: Arc<dyn ShortcutHandler>,
    state: HandlerState,
}

/// The bridge registry: plugin name → native handler.
pub struct BridgeRegistry {
    handlers: HashMap<String, HandlerEntry>,
}

impl BridgeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under a plugin name. Returns an error if the
    /// name is taken.
    pub fn register(
        &mut self,
        plugin: impl Into<String>,
        handler: Arc<dyn ShortcutHandler>,
    ) -> Result<(), BridgeError> {
        let plugin = plugin.into();
        if self.handlers.contains_key(&plugin) {
            return Err(BridgeError::AlreadyRegistered { plugin });
        }
        debug!(plugin = %plugin, "registering native handler");
        let state = HandlerState {
            plugin: plugin.clone(),
            registered_at: Utc::now(),
        };
        self.handlers.insert(plugin, HandlerEntry { handler, state });
        Ok(())
    }

    /// Unregister a handler by plugin name.
    pub fn unregister(&mut self, plugin: &str) -> Result<(), BridgeError> {
        if self.handlers.remove(plugin).is_none() {
            return Err(BridgeError::HandlerNotFound {
                plugin: plugin.to_owned(),
            });
        }
        debug!(plugin = %plugin, "unregistered native handler");
        Ok(())
    }

    /// Get a handler by plugin name.
    pub fn get(&self, plugin: &str) -> Option<Arc<dyn ShortcutHandler>> {
        self.handlers.get(plugin).map(|entry| entry.handler.clone())
    }

    /// List all registrations.
    pub fn list(&self) -> Vec<&HandlerState> {
        self.handlers.values().map(|entry| &entry.state).collect()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Issue one bridge call.
    ///
    /// Spawns the handler invocation on the Tokio runtime and returns
    /// immediately; the future settles when the handler answers. With
    /// no handler under `plugin`, the error callback receives the
    /// native "not available" payload and the future a
    /// [`BridgeError::HandlerNotFound`]. Must be called within a Tokio
    /// runtime.
    pub fn exec(
        &self,
        plugin: &str,
        action: Action,
        args: Vec<Value>,
        callbacks: OutcomeCallbacks,
    ) -> OutcomeFuture {
        let (responder, future) = Responder::channel(action, callbacks);
        match self.get(plugin) {
            Some(handler) => {
                debug!(
                    plugin = %plugin,
                    action = action.name(),
                    args = args.len(),
                    "dispatching bridge call"
                );
                tokio::spawn(async move {
                    dispatch(handler.as_ref(), action, args, responder).await;
                });
            }
            None => {
                warn!(plugin = %plugin, action = action.name(), "no native handler registered");
                responder.fail(
                    ResponseCode::NoSiriShortcuts.payload(),
                    BridgeError::HandlerNotFound {
                        plugin: plugin.to_owned(),
                    },
                );
            }
        }
        future
    }
}

impl Default for BridgeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    struct EchoHandler;

    #[async_trait]
    impl ShortcutHandler for EchoHandler {
        async fn donate(&self, args: Vec<Value>, responder: Responder) {
            responder.resolve(json!({"echo": args}));
        }
        async fn present(&self, args: Vec<Value>, responder: Responder) {
            responder.resolve(json!({"echo": args}));
        }
        async fn remove(&self, args: Vec<Value>, responder: Responder) {
            responder.resolve(json!({"echo": args}));
        }
        async fn remove_all(&self, args: Vec<Value>, responder: Responder) {
            responder.resolve(json!({"echo": args}));
        }
        async fn get_activated_shortcut(&self, args: Vec<Value>, responder: Responder) {
            responder.resolve(json!({"echo": args}));
        }
        async fn get_all_shortcuts(&self, args: Vec<Value>, responder: Responder) {
            responder.resolve(json!({"echo": args}));
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = BridgeRegistry::new();
        assert!(registry.is_empty());

        registry
            .register("SiriShortcuts", Arc::new(EchoHandler))
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("SiriShortcuts").is_some());
        assert!(registry.get("Unknown").is_none());

        let list = registry.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].plugin, "SiriShortcuts");
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = BridgeRegistry::new();
        registry
            .register("SiriShortcuts", Arc::new(EchoHandler))
            .unwrap();
        let result = registry.register("SiriShortcuts", Arc::new(EchoHandler));
        assert!(matches!(
            result,
            Err(BridgeError::AlreadyRegistered { .. })
        ));
    }

    #[test]
    fn test_unregister() {
        let mut registry = BridgeRegistry::new();
        registry
            .register("SiriShortcuts", Arc::new(EchoHandler))
            .unwrap();
        registry.unregister("SiriShortcuts").unwrap();
        assert!(registry.is_empty());

        let result = registry.unregister("SiriShortcuts");
        assert!(matches!(result, Err(BridgeError::HandlerNotFound { .. })));
    }

    #[tokio::test]
    async fn test_exec_reaches_handler() {
        let mut registry = BridgeRegistry::new();
        registry
            .register("SiriShortcuts", Arc::new(EchoHandler))
            .unwrap();

        let outcome = registry
            .exec(
                "SiriShortcuts",
                Action::Donate,
                vec![json!("id")],
                OutcomeCallbacks::new(),
            )
            .await
            .unwrap();
        assert_eq!(outcome["echo"], json!(["id"]));
    }

    #[tokio::test]
    async fn test_exec_without_handler_synthesizes_unavailable() {
        let registry = BridgeRegistry::new();
        let seen = Arc::new(Mutex::new(None));
        let seen_in_callback = seen.clone();
        let callbacks = OutcomeCallbacks::new()
            .on_error(move |payload| *seen_in_callback.lock().unwrap() = Some(payload));

        let result = registry
            .exec("SiriShortcuts", Action::RemoveAll, Vec::new(), callbacks)
            .await;

        assert!(matches!(result, Err(BridgeError::HandlerNotFound { .. })));
        let payload = seen.lock().unwrap().take().unwrap();
        assert_eq!(payload["code"], ResponseCode::NoSiriShortcuts.code());
    }
}
