//! Host platform detection.
//!
//! The embedder describes what the surrounding webview environment offers via
//! [`HostEnvironment`]; detection probes it in a fixed order (Windows first)
//! and the result is fixed for the lifetime of the client. A probe that
//! panics counts as a failed probe, never as a fatal condition.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use tracing::debug;

use crate::transport::{
    MessageChannel, MessageHandlerTransport, NotifyFn, NotifyTransport, Transport,
};

/// The two webview hosts the bridge knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Macos,
}

/// Capabilities the embedding environment may expose.
///
/// Each probe returns `None` when the corresponding global is absent. Probes
/// may panic (the environment is duck-typed on the other side of an FFI
/// boundary); the detector isolates that.
pub trait HostEnvironment {
    /// Windows `external.notify`, if present and callable.
    fn external_notify(&self) -> Option<NotifyFn>;

    /// macOS `webkit.messageHandlers.pahkat`, if present.
    fn message_handler(&self) -> Option<Arc<dyn MessageChannel>>;
}

impl Platform {
    /// Probe the environment, Windows first. `None` when neither probe
    /// succeeds.
    pub fn detect(env: &dyn HostEnvironment) -> Option<Platform> {
        if probe(|| env.external_notify()).is_some() {
            return Some(Platform::Windows);
        }
        if probe(|| env.message_handler()).is_some() {
            return Some(Platform::Macos);
        }
        None
    }
}

/// Detect the platform and build its transport in one pass.
pub fn select(env: &dyn HostEnvironment) -> Option<(Platform, Arc<dyn Transport>)> {
    if let Some(notify) = probe(|| env.external_notify()) {
        debug!("detected windows host (external.notify)");
        return Some((Platform::Windows, Arc::new(NotifyTransport::new(notify))));
    }
    if let Some(channel) = probe(|| env.message_handler()) {
        debug!("detected macos host (webkit message handler)");
        return Some((
            Platform::Macos,
            Arc::new(MessageHandlerTransport::new(channel)),
        ));
    }
    None
}

fn probe<T>(f: impl FnOnce() -> Option<T>) -> Option<T> {
    catch_unwind(AssertUnwindSafe(f)).ok().flatten()
}
