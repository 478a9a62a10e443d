//! The bridge façade.
//!
//! Translates the typed operation surface into the positional-argument,
//! dual-callback convention of the native handler registered under the
//! fixed plugin name. Each operation is one stateless request/response
//! round trip; the façade validates nothing and never inspects
//! payloads.

use serde_json::Value;
use shortcuts_core::{ActivationQuery, BridgeConfig, RemovalRequest, ShortcutDescriptor};
use std::sync::Arc;

use crate::action::Action;
use crate::outcome::{OutcomeCallbacks, OutcomeFuture};
use crate::registry::BridgeRegistry;

/// The fixed plugin name every façade call targets.
pub const PLUGIN_NAME: &str = "SiriShortcuts";

/// Façade over the native Siri shortcut engine.
pub struct SiriShortcuts {
    registry: Arc<BridgeRegistry>,
    config: BridgeConfig,
}

impl SiriShortcuts {
    /// Create a façade with default configuration.
    pub fn new(registry: Arc<BridgeRegistry>) -> Self {
        Self::with_config(registry, BridgeConfig::default())
    }

    /// Create a façade with explicit configuration.
    pub fn with_config(registry: Arc<BridgeRegistry>, config: BridgeConfig) -> Self {
        Self { registry, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Build a descriptor with the configured eligibility defaults
    /// applied.
    pub fn new_shortcut(
        &self,
        persistent_identifier: impl Into<String>,
        title: impl Into<String>,
        invocation_phrase: impl Into<String>,
    ) -> ShortcutDescriptor {
        ShortcutDescriptor::new(persistent_identifier, title, invocation_phrase)
            .eligible_for_search(self.config.descriptor.eligible_for_search)
            .eligible_for_prediction(self.config.descriptor.eligible_for_prediction)
    }

    /// Donate a shortcut to the native index so it can be suggested or
    /// voice-triggered later.
    pub fn donate(
        &self,
        shortcut: &ShortcutDescriptor,
        callbacks: OutcomeCallbacks,
    ) -> OutcomeFuture {
        self.registry
            .exec(PLUGIN_NAME, Action::Donate, shortcut.to_args(), callbacks)
    }

    /// Present the native setup flow for a shortcut. If the shortcut
    /// already exists the native side presents update/delete instead.
    pub fn present(
        &self,
        shortcut: &ShortcutDescriptor,
        callbacks: OutcomeCallbacks,
    ) -> OutcomeFuture {
        self.registry
            .exec(PLUGIN_NAME, Action::Present, shortcut.to_args(), callbacks)
    }

    /// Remove shortcuts by persistent identifier. A bare identifier is
    /// forwarded as a one-element sequence.
    pub fn remove(
        &self,
        identifiers: impl Into<RemovalRequest>,
        callbacks: OutcomeCallbacks,
    ) -> OutcomeFuture {
        let identifiers = identifiers
            .into()
            .into_identifiers()
            .into_iter()
            .map(Value::String)
            .collect();
        self.registry.exec(
            PLUGIN_NAME,
            Action::Remove,
            vec![Value::Array(identifiers)],
            callbacks,
        )
    }

    /// Remove every shortcut donated by this application.
    pub fn remove_all(&self, callbacks: OutcomeCallbacks) -> OutcomeFuture {
        self.registry
            .exec(PLUGIN_NAME, Action::RemoveAll, Vec::new(), callbacks)
    }

    /// Fetch the shortcut the user most recently activated, if any.
    /// With no query, the configured default decides whether the
    /// record is cleared (cleared, out of the box).
    pub fn activated_shortcut(
        &self,
        query: Option<ActivationQuery>,
        callbacks: OutcomeCallbacks,
    ) -> OutcomeFuture {
        let query = query.unwrap_or_else(|| self.config.activation.default_query());
        self.registry.exec(
            PLUGIN_NAME,
            Action::GetActivatedShortcut,
            vec![Value::Bool(query.clear)],
            callbacks,
        )
    }

    /// Fetch all shortcuts the native side knows for this application.
    pub fn all_shortcuts(&self, callbacks: OutcomeCallbacks) -> OutcomeFuture {
        self.registry
            .exec(PLUGIN_NAME, Action::GetAllShortcuts, Vec::new(), callbacks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::ShortcutHandler;
    use crate::outcome::Responder;
    use async_trait::async_trait;
    use serde_json::json;
    use shortcuts_core::{ActivationDefaults, DescriptorDefaults};
    use std::sync::Mutex;

    struct RecordingHandler {
        calls: Arc<Mutex<Vec<(Action, Vec<Value>)>>>,
    }

    impl RecordingHandler {
        fn answer(&self, action: Action, args: Vec<Value>, responder: Responder) {
            self.calls.lock().unwrap().push((action, args));
            responder.resolve(json!({"ok": true}));
        }
    }

    #[async_trait]
    impl ShortcutHandler for RecordingHandler {
        async fn donate(&self, args: Vec<Value>, responder: Responder) {
            self.answer(Action::Donate, args, responder);
        }
        async fn present(&self, args: Vec<Value>, responder: Responder) {
            self.answer(Action::Present, args, responder);
        }
        async fn remove(&self, args: Vec<Value>, responder: Responder) {
            self.answer(Action::Remove, args, responder);
        }
        async fn remove_all(&self, args: Vec<Value>, responder: Responder) {
            self.answer(Action::RemoveAll, args, responder);
        }
        async fn get_activated_shortcut(&self, args: Vec<Value>, responder: Responder) {
            self.answer(Action::GetActivatedShortcut, args, responder);
        }
        async fn get_all_shortcuts(&self, args: Vec<Value>, responder: Responder) {
            self.answer(Action::GetAllShortcuts, args, responder);
        }
    }

    fn facade_with_recorder() -> (SiriShortcuts, Arc<Mutex<Vec<(Action, Vec<Value>)>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut registry = BridgeRegistry::new();
        registry
            .register(
                PLUGIN_NAME,
                Arc::new(RecordingHandler {
                    calls: calls.clone(),
                }),
            )
            .unwrap();
        (SiriShortcuts::new(Arc::new(registry)), calls)
    }

    #[tokio::test]
    async fn test_donate_forwards_six_args_in_order() {
        let (facade, calls) = facade_with_recorder();
        let shortcut = ShortcutDescriptor::new("order-coffee", "Order Coffee", "Coffee time");

        facade
            .donate(&shortcut, OutcomeCallbacks::new())
            .await
            .unwrap();

        let calls = calls.lock().unwrap();
        let (action, args) = &calls[0];
        assert_eq!(*action, Action::Donate);
        assert_eq!(args.len(), 6);
        assert_eq!(args[0], json!("order-coffee"));
        assert_eq!(args[3], json!({}));
        assert_eq!(args[5], json!(true));
    }

    #[tokio::test]
    async fn test_activated_shortcut_uses_configured_default() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut registry = BridgeRegistry::new();
        registry
            .register(
                PLUGIN_NAME,
                Arc::new(RecordingHandler {
                    calls: calls.clone(),
                }),
            )
            .unwrap();
        let config = BridgeConfig {
            descriptor: DescriptorDefaults::default(),
            activation: ActivationDefaults {
                clear_on_fetch: false,
            },
        };
        let facade = SiriShortcuts::with_config(Arc::new(registry), config);

        facade
            .activated_shortcut(None, OutcomeCallbacks::new())
            .await
            .unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls[0].1, vec![json!(false)]);
    }

    #[tokio::test]
    async fn test_new_shortcut_applies_configured_defaults() {
        let (facade, _calls) = facade_with_recorder();
        let shortcut = facade.new_shortcut("order-coffee", "Order Coffee", "Coffee time");
        assert!(shortcut.is_eligible_for_search);
        assert!(shortcut.is_eligible_for_prediction);

        let registry = Arc::new(BridgeRegistry::new());
        let config = BridgeConfig {
            descriptor: DescriptorDefaults {
                eligible_for_search: false,
                eligible_for_prediction: true,
            },
            activation: ActivationDefaults::default(),
        };
        let facade = SiriShortcuts::with_config(registry, config);
        let shortcut = facade.new_shortcut("order-coffee", "Order Coffee", "Coffee time");
        assert!(!shortcut.is_eligible_for_search);
        assert!(shortcut.is_eligible_for_prediction);
    }
}
