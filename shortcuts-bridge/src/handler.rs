//! The native collaborator interface.
//!
//! The entire donation engine (persistence, the on-device search
//! index, voice-phrase matching, the setup-flow UI) lives behind this
//! trait and is out of scope here. One async method per action name;
//! each receives the documented positional argument list and a
//! [`Responder`] it must consume exactly once.
//!
//! Handler implementations decode descriptor arguments with
//! [`ShortcutDescriptor::from_args`] and report outcomes using the
//! [`ResponseCode`] vocabulary.
//!
//! [`ShortcutDescriptor::from_args`]: shortcuts_core::ShortcutDescriptor::from_args
//! [`ResponseCode`]: shortcuts_core::ResponseCode

use async_trait::async_trait;
use serde_json::Value;

use crate::action::Action;
use crate::outcome::Responder;

/// A native shortcut engine reachable through the bridge.
#[async_trait]
pub trait ShortcutHandler: Send + Sync {
    /// Donate a shortcut to the native index. Args: the six-element
    /// descriptor list.
    async fn donate(&self, args: Vec<Value>, responder: Responder);

    /// Present the native setup flow. Args: the six-element descriptor
    /// list.
    async fn present(&self, args: Vec<Value>, responder: Responder);

    /// Remove shortcuts. Args: a single element holding the identifier
    /// sequence.
    async fn remove(&self, args: Vec<Value>, responder: Responder);

    /// Remove every shortcut donated by this application. Args: empty.
    async fn remove_all(&self, args: Vec<Value>, responder: Responder);

    /// Fetch the most recently activated shortcut. Args: a single
    /// boolean controlling whether the record is cleared.
    async fn get_activated_shortcut(&self, args: Vec<Value>, responder: Responder);

    /// Fetch all shortcuts known to the native side. Args: empty.
    async fn get_all_shortcuts(&self, args: Vec<Value>, responder: Responder);
}

/// Route a call to the handler method matching its action.
pub(crate) async fn dispatch(
    handler: &dyn ShortcutHandler,
    action: Action,
    args: Vec<Value>,
    responder: Responder,
) {
    match action {
        Action::Donate => handler.donate(args, responder).await,
        Action::Present => handler.present(args, responder).await,
        Action::Remove => handler.remove(args, responder).await,
        Action::RemoveAll => handler.remove_all(args, responder).await,
        Action::GetActivatedShortcut => handler.get_activated_shortcut(args, responder).await,
        Action::GetAllShortcuts => handler.get_all_shortcuts(args, responder).await,
    }
}
