//! Correlation table pairing outgoing calls with one-shot responders.
//!
//! The host has no return channel of its own: it answers a call by invoking
//! the well-known entry point [`deliver`] with the `callback-{id}` key from
//! the request envelope. The table entry is removed before the responder
//! runs, so cleanup happens exactly once on every settle path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::{debug, warn};

/// One-shot handler for a raw response message.
pub type Responder = Box<dyn FnOnce(&str) + Send>;

/// Registry key for a correlation id.
pub fn callback_key(id: u64) -> String {
    format!("callback-{id}")
}

/// Maps in-flight correlation ids to their responders and allocates new ids.
///
/// Ids start at 0, increase by one per call, and are never reused for the
/// lifetime of the table. A call the host never answers leaves its entry
/// installed until the process exits; there is no timeout.
pub struct ResponderTable {
    next_id: AtomicU64,
    entries: Mutex<HashMap<String, Responder>>,
}

impl ResponderTable {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide table the host delivers into. Clients use this one
    /// unless given another.
    pub fn global() -> Arc<ResponderTable> {
        static GLOBAL: OnceLock<Arc<ResponderTable>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(ResponderTable::new())).clone()
    }

    /// Allocate the next correlation id.
    pub fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Register the responder for an outstanding call.
    pub fn register(&self, id: u64, responder: Responder) {
        let prev = self
            .entries
            .lock()
            .unwrap()
            .insert(callback_key(id), responder);
        debug_assert!(prev.is_none(), "correlation id registered twice: {id}");
        debug!(id, "responder registered");
    }

    /// Remove the responder for `key` and invoke it with the raw message.
    /// Returns false when no responder was registered under that key.
    pub fn dispatch(&self, key: &str, message: &str) -> bool {
        let responder = self.entries.lock().unwrap().remove(key);
        match responder {
            Some(responder) => {
                debug!(key, "dispatching response");
                responder(message);
                true
            }
            None => {
                warn!(key, "response delivered for unknown responder key");
                false
            }
        }
    }

    /// Drop a registration without invoking it. The pending call settles as
    /// a closed-channel error.
    pub fn unregister(&self, id: u64) -> bool {
        self.entries.lock().unwrap().remove(&callback_key(id)).is_some()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.lock().unwrap().contains_key(&callback_key(id))
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ResponderTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Host-facing entry point: deliver a serialized response to the responder
/// registered under `key` in the global table.
pub fn deliver(key: &str, message: &str) -> bool {
    ResponderTable::global().dispatch(key, message)
}
