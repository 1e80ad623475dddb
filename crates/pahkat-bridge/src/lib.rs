//! RPC bridge between a web-rendered UI and the native pahkat host.
//!
//! The UI runs inside an embedded webview and has no direct way to call the
//! package manager; both platforms only offer a one-way, fire-and-forget
//! string channel out of the page (Windows `external.notify`, macOS
//! `webkit.messageHandlers`). This crate provides:
//! - Platform detection and transport selection, done once at startup
//! - A correlation table pairing each outgoing call with a one-shot responder
//! - A typed [`RpcClient`] exposing the host's package operations as futures
//!
//! Responses flow back through one well-known entry point: the host calls
//! [`deliver`] with the `callback-{id}` key it was given in the request
//! envelope and the serialized response text.

pub mod envelope;
pub mod error;
pub mod platform;
pub mod responders;
pub mod rpc;
pub mod transport;

pub use envelope::CallEnvelope;
pub use error::RpcError;
pub use platform::{HostEnvironment, Platform};
pub use responders::{callback_key, deliver, ResponderTable};
pub use rpc::RpcClient;
pub use transport::{MessageChannel, MessageHandlerTransport, NotifyFn, NotifyTransport, Transport};
