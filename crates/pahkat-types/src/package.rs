use serde::{Deserialize, Serialize};

/// Package metadata as the host reports it.
///
/// The host owns this schema and it varies per repository format, so the
/// bridge carries it as raw JSON rather than pinning fields that would go
/// stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Package(pub serde_json::Value);

/// Install status of a package, as an integer code on the wire.
/// Negative codes are error states reported by the host's installer probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum PackageStatus {
    NotInstalled,
    UpToDate,
    RequiresUpdate,
    VersionSkipped,
    ErrorNoPackage,
    ErrorNoInstaller,
    ErrorWrongInstallerType,
    ErrorInvalidVersion,
    ErrorInvalidInstallPath,
    ErrorInvalidMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown package status code: {0}")]
pub struct UnknownStatusCode(pub i32);

impl From<PackageStatus> for i32 {
    fn from(status: PackageStatus) -> i32 {
        match status {
            PackageStatus::NotInstalled => 0,
            PackageStatus::UpToDate => 1,
            PackageStatus::RequiresUpdate => 2,
            PackageStatus::VersionSkipped => 3,
            PackageStatus::ErrorNoPackage => -1,
            PackageStatus::ErrorNoInstaller => -2,
            PackageStatus::ErrorWrongInstallerType => -3,
            PackageStatus::ErrorInvalidVersion => -4,
            PackageStatus::ErrorInvalidInstallPath => -5,
            PackageStatus::ErrorInvalidMetadata => -6,
        }
    }
}

impl TryFrom<i32> for PackageStatus {
    type Error = UnknownStatusCode;

    fn try_from(code: i32) -> Result<Self, UnknownStatusCode> {
        match code {
            0 => Ok(PackageStatus::NotInstalled),
            1 => Ok(PackageStatus::UpToDate),
            2 => Ok(PackageStatus::RequiresUpdate),
            3 => Ok(PackageStatus::VersionSkipped),
            -1 => Ok(PackageStatus::ErrorNoPackage),
            -2 => Ok(PackageStatus::ErrorNoInstaller),
            -3 => Ok(PackageStatus::ErrorWrongInstallerType),
            -4 => Ok(PackageStatus::ErrorInvalidVersion),
            -5 => Ok(PackageStatus::ErrorInvalidInstallPath),
            -6 => Ok(PackageStatus::ErrorInvalidMetadata),
            other => Err(UnknownStatusCode(other)),
        }
    }
}

/// Where an install or uninstall applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTarget {
    System,
    User,
}
