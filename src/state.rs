//! Install state classification
//!
//! The state is a pure function of the persisted install metadata at query
//! time; it is recomputed on every query and never cached.

use semver::Version;

/// Classification of the current system relative to the package being applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    /// Nothing usable is registered, or a version older than the package is.
    ///
    /// An older registered version resolves here on purpose: it proceeds
    /// through the normal install path as an overwrite upgrade. If a live
    /// process still holds the instance lock in this state, that is the
    /// "already running, close it to upgrade" scenario the retry prompt
    /// handles.
    NotInstalled,

    /// The installed version equals the package version
    Installed,

    /// The installed version is higher than the package version
    HigherVersionFound,
}

impl InstallState {
    /// Human-readable label for status reporting
    pub fn label(self) -> &'static str {
        match self {
            InstallState::NotInstalled => "Not installed",
            InstallState::Installed => "Installed and up to date",
            InstallState::HigherVersionFound => "Installed with a newer version",
        }
    }
}

/// Classify the installed version (if any) against the package version
///
/// Absent or unreadable metadata maps to `NotInstalled`; the comparison uses
/// semver's total order.
pub fn classify(installed: Option<&Version>, package: &Version) -> InstallState {
    match installed {
        None => InstallState::NotInstalled,
        Some(version) if version > package => InstallState::HigherVersionFound,
        Some(version) if version == package => InstallState::Installed,
        Some(_) => InstallState::NotInstalled,
    }
}
