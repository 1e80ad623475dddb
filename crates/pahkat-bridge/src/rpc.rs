//! The RPC client the UI talks to.
//!
//! Every operation shares one protocol: allocate the next correlation id,
//! register a one-shot responder under `callback-{id}`, serialize the
//! `{id, method, args}` envelope, post it through the selected transport,
//! and wait. The host settles the call by invoking [`crate::deliver`] with
//! that key and the serialized response.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use pahkat_types::{LanguageResponse, Package, PackageKey};

use crate::envelope::{self, CallEnvelope};
use crate::error::RpcError;
use crate::platform::{self, HostEnvironment, Platform};
use crate::responders::ResponderTable;
use crate::transport::Transport;

/// Asynchronous client for the native package-management host.
///
/// Calls are fire-and-wait: there is no timeout, no retry, and no
/// cancellation. A call the host never answers stays pending for the life
/// of the process; embedders that need a bound should wrap calls in
/// `tokio::time::timeout`.
pub struct RpcClient {
    platform: Option<Platform>,
    transport: Option<Arc<dyn Transport>>,
    responders: Arc<ResponderTable>,
}

impl RpcClient {
    /// Detect the platform once and build the client around its transport.
    ///
    /// When neither probe succeeds the client still hands out futures, but
    /// dispatch goes nowhere and they never settle.
    pub fn from_environment(env: &dyn HostEnvironment) -> Self {
        match platform::select(env) {
            Some((platform, transport)) => Self {
                platform: Some(platform),
                transport: Some(transport),
                responders: ResponderTable::global(),
            },
            None => {
                warn!("no supported host transport detected; calls will never settle");
                Self {
                    platform: None,
                    transport: None,
                    responders: ResponderTable::global(),
                }
            }
        }
    }

    /// Build a client with an explicitly chosen platform and transport.
    pub fn new(platform: Platform, transport: Arc<dyn Transport>) -> Self {
        Self {
            platform: Some(platform),
            transport: Some(transport),
            responders: ResponderTable::global(),
        }
    }

    /// Use a private responder table instead of the process-wide one.
    pub fn with_table(mut self, table: Arc<ResponderTable>) -> Self {
        self.responders = table;
        self
    }

    /// The platform detected or chosen at construction, if any.
    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    /// Install the given packages. The host reports completion with a
    /// contentless success payload.
    pub async fn install(&self, keys: &[PackageKey]) -> Result<(), RpcError> {
        let keys = serde_json::to_value(keys).map_err(RpcError::Encode)?;
        self.invoke("install", vec![keys]).await.map(|_| ())
    }

    /// Uninstall the given packages.
    pub async fn uninstall(&self, keys: &[PackageKey]) -> Result<(), RpcError> {
        let keys = serde_json::to_value(keys).map_err(RpcError::Encode)?;
        self.invoke("uninstall", vec![keys]).await.map(|_| ())
    }

    /// Search the repository by language, grouped by BCP-47 tag.
    pub async fn search_by_language(&self, query: &str) -> Result<LanguageResponse, RpcError> {
        let value = self
            .invoke("searchByLanguage", vec![Value::String(query.to_string())])
            .await?;
        serde_json::from_value(value).map_err(RpcError::Decode)
    }

    /// Fetch metadata for the given packages.
    pub async fn packages(&self, keys: &[PackageKey]) -> Result<Vec<Package>, RpcError> {
        let keys = serde_json::to_value(keys).map_err(RpcError::Encode)?;
        let value = self.invoke("packages", vec![keys]).await?;
        serde_json::from_value(value).map_err(RpcError::Decode)
    }

    /// Fetch a localized string by key, with optional format arguments.
    pub async fn string(&self, key: &str, args: &[Value]) -> Result<String, RpcError> {
        let mut call_args = Vec::with_capacity(1 + args.len());
        call_args.push(Value::String(key.to_string()));
        call_args.extend(args.iter().cloned());
        let value = self.invoke("string", call_args).await?;
        serde_json::from_value(value).map_err(RpcError::Decode)
    }

    /// Issue a raw call and resolve with the host's full parsed response.
    ///
    /// The typed operations above are thin wrappers over this; it is public
    /// for host methods the bridge does not model.
    pub async fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Value, RpcError> {
        let id = self.responders.next_id();
        let payload = CallEnvelope::new(id, method, args).to_json()?;

        let (tx, rx) = oneshot::channel();
        self.responders.register(
            id,
            Box::new(move |raw| {
                // The receiver is gone only if the caller stopped waiting.
                let _ = tx.send(envelope::parse_response(raw));
            }),
        );

        match &self.transport {
            Some(transport) => {
                debug!(id, method, "dispatching call");
                transport.post(&payload);
            }
            None => warn!(id, method, "no transport selected; call will never settle"),
        }

        match rx.await {
            Ok(outcome) => outcome,
            Err(_) => Err(RpcError::ChannelClosed),
        }
    }
}
