//! Outcome plumbing: the dual-callback pair and the per-call future,
//! connected.
//!
//! Every bridge call carries an optional success callback and an
//! optional error callback, and returns an [`OutcomeFuture`]. One
//! native response settles all of them: the matching callback fires and
//! the future resolves with the same payload. The native side answers
//! through a [`Responder`], which consumes itself on first use, so
//! "exactly one of the two channels, exactly once" is enforced by move
//! semantics rather than assumed.

use serde_json::Value;
use shortcuts_core::{BridgeError, ResponseCode};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tracing::warn;

use crate::action::Action;

/// Callback invoked with the opaque native success payload.
pub type SuccessCallback = Box<dyn FnOnce(Value) + Send + 'static>;

/// Callback invoked with the opaque native error payload.
pub type ErrorCallback = Box<dyn FnOnce(Value) + Send + 'static>;

/// Optional callback pair observed alongside the returned future.
#[derive(Default)]
pub struct OutcomeCallbacks {
    on_success: Option<SuccessCallback>,
    on_error: Option<ErrorCallback>,
}

impl OutcomeCallbacks {
    /// No callbacks; the caller relies on the returned future alone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a success callback.
    pub fn on_success(mut self, callback: impl FnOnce(Value) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Attach an error callback.
    pub fn on_error(mut self, callback: impl FnOnce(Value) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }
}

struct ResponderInner {
    callbacks: OutcomeCallbacks,
    tx: oneshot::Sender<Result<Value, BridgeError>>,
}

/// Response channel handed to the native handler.
///
/// The handler must answer each call through exactly one of
/// [`resolve`] or [`reject`]; both consume the responder. Dropping a
/// responder unanswered reports an internal error instead of stranding
/// the caller.
///
/// [`resolve`]: Responder::resolve
/// [`reject`]: Responder::reject
pub struct Responder {
    action: Action,
    inner: Option<ResponderInner>,
}

impl Responder {
    /// Create a responder and the future it settles.
    pub(crate) fn channel(action: Action, callbacks: OutcomeCallbacks) -> (Self, OutcomeFuture) {
        let (tx, rx) = oneshot::channel();
        let responder = Self {
            action,
            inner: Some(ResponderInner { callbacks, tx }),
        };
        (responder, OutcomeFuture { action, rx })
    }

    /// The action this responder answers.
    pub fn action(&self) -> Action {
        self.action
    }

    /// Report success. The payload reaches the success callback and the
    /// future unmodified.
    pub fn resolve(mut self, payload: Value) {
        if let Some(inner) = self.inner.take() {
            if let Some(callback) = inner.callbacks.on_success {
                callback(payload.clone());
            }
            let _ = inner.tx.send(Ok(payload));
        }
    }

    /// Report failure. The payload reaches the error callback
    /// unmodified; the future resolves to [`BridgeError::Native`]
    /// carrying the same payload.
    pub fn reject(mut self, payload: Value) {
        if let Some(inner) = self.inner.take() {
            if let Some(callback) = inner.callbacks.on_error {
                callback(payload.clone());
            }
            let _ = inner.tx.send(Err(BridgeError::Native {
                action: self.action.name().to_owned(),
                payload,
            }));
        }
    }

    /// Report a failure the bridge detected locally: the error callback
    /// receives `payload`, the future receives `error`.
    pub(crate) fn fail(mut self, payload: Value, error: BridgeError) {
        if let Some(inner) = self.inner.take() {
            if let Some(callback) = inner.callbacks.on_error {
                callback(payload);
            }
            let _ = inner.tx.send(Err(error));
        }
    }
}

impl Drop for Responder {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.take() {
            warn!(
                action = self.action.name(),
                "native handler dropped its responder without responding"
            );
            if let Some(callback) = inner.callbacks.on_error {
                callback(ResponseCode::InternalError.payload());
            }
            let _ = inner.tx.send(Err(BridgeError::NoResponse {
                action: self.action.name().to_owned(),
            }));
        }
    }
}

/// The future returned by every bridge operation.
///
/// Resolves when the native handler answers; yields the opaque success
/// payload or the bridge error carrying the opaque error payload.
pub struct OutcomeFuture {
    action: Action,
    rx: oneshot::Receiver<Result<Value, BridgeError>>,
}

impl Future for OutcomeFuture {
    type Output = Result<Value, BridgeError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            // The sender vanished without answering; the responder's
            // drop path normally reports first, so this is a backstop.
            Poll::Ready(Err(_)) => Poll::Ready(Err(BridgeError::NoResponse {
                action: this.action.name().to_owned(),
            })),
            Poll::Pending => Poll::Pending,
        }
    }
}
