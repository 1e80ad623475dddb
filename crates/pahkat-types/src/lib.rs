//! Package data-model types flowing through the pahkat bridge.
//!
//! These shapes mirror what the native host sends over the wire. The bridge
//! itself treats them as opaque payloads; nothing here is validated beyond
//! what serde needs to decode them.

mod key;
mod package;
mod search;

pub use key::PackageKey;
pub use package::{Package, PackageStatus, PackageTarget, UnknownStatusCode};
pub use search::{LanguageEntry, LanguageResponse, PackageResponse};
