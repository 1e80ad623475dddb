use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::key::PackageKey;
use crate::package::{Package, PackageStatus, PackageTarget};

/// Result of a language search: BCP-47 tag -> packages for that language.
pub type LanguageResponse = HashMap<String, LanguageEntry>;

/// Packages available for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    /// Autonym of the language, e.g. "davvisámegiella".
    pub language_name: String,
    pub packages: HashMap<PackageKey, PackageResponse>,
}

/// One package hit within a language entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageResponse {
    pub package: Package,
    pub status: PackageStatus,
    pub target: PackageTarget,
}
