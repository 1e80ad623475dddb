//! Outgoing transports toward the native host.
//!
//! Both platforms expose a one-way string channel out of the webview; neither
//! has a return path, which is why responses come back through the responder
//! table instead. Exactly two implementations exist and one is selected at
//! startup — call sites never branch on platform.

use std::sync::Arc;

use tracing::trace;

/// Windows-style one-way notifier: a single function taking the serialized
/// envelope. No return value.
pub type NotifyFn = Arc<dyn Fn(String) + Send + Sync>;

/// macOS-style structured message channel (`webkit.messageHandlers.pahkat`).
pub trait MessageChannel: Send + Sync {
    fn post_message(&self, payload: String);
}

/// Fire-and-forget dispatch of a serialized call envelope.
pub trait Transport: Send + Sync {
    fn post(&self, payload: &str);
}

/// Transport over the Windows `external.notify` function.
pub struct NotifyTransport {
    notify: NotifyFn,
}

impl NotifyTransport {
    pub fn new(notify: NotifyFn) -> Self {
        Self { notify }
    }
}

impl Transport for NotifyTransport {
    fn post(&self, payload: &str) {
        trace!(len = payload.len(), "posting via external.notify");
        (self.notify)(payload.to_string());
    }
}

/// Transport over the macOS webkit message handler channel.
pub struct MessageHandlerTransport {
    channel: Arc<dyn MessageChannel>,
}

impl MessageHandlerTransport {
    pub fn new(channel: Arc<dyn MessageChannel>) -> Self {
        Self { channel }
    }
}

impl Transport for MessageHandlerTransport {
    fn post(&self, payload: &str) {
        trace!(len = payload.len(), "posting via message handler");
        self.channel.post_message(payload.to_string());
    }
}
