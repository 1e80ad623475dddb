use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully qualified package key, e.g. `pkg://divvun-spell-sme`.
///
/// Keys are assigned by the repository and treated as opaque identifiers
/// here; the host resolves them against its repository index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageKey(String);

impl PackageKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PackageKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_inner() {
        let key = PackageKey::new("pkg://a");
        assert_eq!(key.to_string(), "pkg://a");
        assert_eq!(key.as_str(), "pkg://a");
    }

    #[test]
    fn serializes_as_bare_string() {
        let key = PackageKey::new("pkg://a");
        assert_eq!(serde_json::to_string(&key).unwrap(), r#""pkg://a""#);

        let back: PackageKey = serde_json::from_str(r#""pkg://a""#).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn usable_as_map_key() {
        use std::collections::HashMap;

        let json = r#"{"pkg://a": 1, "pkg://b": 2}"#;
        let map: HashMap<PackageKey, u32> = serde_json::from_str(json).unwrap();
        assert_eq!(map[&PackageKey::from("pkg://a")], 1);
        assert_eq!(map[&PackageKey::from("pkg://b")], 2);
    }
}
