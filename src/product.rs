//! Product identity and install location resolution
//!
//! The identity of the product being installed is fixed at compile time;
//! the install directory resolves flag → environment → platform default.

use std::path::{Path, PathBuf};

use semver::Version;

use crate::error::{AppstageError, Result};

/// Human-facing product name, used in prompts and notifications
pub const DISPLAY_NAME: &str = "Appstage";

/// Stable product identifier, used for metadata and diagnostics
pub const IDENTIFIER: &str = "dev.appstage.app";

/// Directory name of the shared runtime component, installed beside the
/// product directory because other applications may use it too
pub const SHARED_COMPONENT_DIR: &str = "appstage-shared";

/// Immutable identity of the product a run operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductIdentity {
    /// Human-facing name shown in prompts and messages
    pub display_name: String,

    /// Stable internal identifier
    pub identifier: String,

    /// Version of the package being applied
    pub version: Version,
}

impl ProductIdentity {
    /// Create an identity for an arbitrary product (used by tests and embedders)
    pub fn new(display_name: &str, identifier: &str, version: Version) -> Self {
        Self {
            display_name: display_name.to_string(),
            identifier: identifier.to_string(),
            version,
        }
    }

    /// Identity of this build, versioned by the crate version
    pub fn current() -> Self {
        let version =
            Version::parse(env!("CARGO_PKG_VERSION")).unwrap_or_else(|_| Version::new(0, 0, 0));
        Self::new(DISPLAY_NAME, IDENTIFIER, version)
    }
}

/// Resolve the install directory from an explicit choice or the platform default
///
/// The CLI folds the `APPSTAGE_INSTALL_DIR` environment variable into the
/// explicit choice, so precedence is flag → environment → platform data dir.
pub fn resolve_install_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    dirs::data_local_dir()
        .map(|dir| dir.join(DISPLAY_NAME))
        .ok_or(AppstageError::NoInstallDir)
}

/// Default location of the shared runtime component, beside the install directory
pub fn shared_component_dir(install_dir: &Path) -> PathBuf {
    match install_dir.parent() {
        Some(parent) => parent.join(SHARED_COMPONENT_DIR),
        None => install_dir.join(SHARED_COMPONENT_DIR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_identity_matches_crate_version() {
        let product = ProductIdentity::current();
        assert_eq!(product.display_name, DISPLAY_NAME);
        assert_eq!(product.identifier, IDENTIFIER);
        assert_eq!(product.version.to_string(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_resolve_install_dir_prefers_explicit() {
        let dir = resolve_install_dir(Some(PathBuf::from("/tmp/custom"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/custom"));
    }

    #[test]
    fn test_shared_component_dir_is_sibling() {
        let dir = shared_component_dir(Path::new("/data/apps/Appstage"));
        assert_eq!(dir, PathBuf::from("/data/apps/appstage-shared"));
    }
}
