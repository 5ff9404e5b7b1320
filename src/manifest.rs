//! Install manifest persistence
//!
//! The manifest is the single source of truth for what is installed: product
//! identifier, version, and the relative paths of every installed file. It is
//! loaded leniently for state detection (anything unreadable counts as not
//! installed) and written strictly.

use std::fs;
use std::path::{Path, PathBuf};

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::error::{AppstageError, Result};

/// Manifest filename inside the install directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// Persisted installation metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallManifest {
    /// Stable product identifier
    pub identifier: String,

    /// Human-facing product name
    pub display_name: String,

    /// Installed version string
    pub version: String,

    /// Relative paths of installed files, rooted at the install directory
    #[serde(default)]
    pub files: Vec<String>,
}

impl InstallManifest {
    /// Path of the manifest inside an install directory
    pub fn path_in(install_dir: &Path) -> PathBuf {
        install_dir.join(MANIFEST_FILE)
    }

    /// Load the manifest from an install directory, tolerating absence and
    /// malformed content
    pub fn load(install_dir: &Path) -> Option<Self> {
        let raw = fs::read_to_string(Self::path_in(install_dir)).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Installed version parsed from the manifest, if any is readable
    pub fn installed_version(install_dir: &Path) -> Option<Version> {
        let manifest = Self::load(install_dir)?;
        Version::parse(&manifest.version).ok()
    }

    /// Write the manifest into an install directory
    pub fn save(&self, install_dir: &Path) -> Result<()> {
        let path = Self::path_in(install_dir);
        let content =
            serde_json::to_string_pretty(self).map_err(|e| AppstageError::ManifestWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        fs::write(&path, content).map_err(|e| AppstageError::ManifestWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Remove the manifest from an install directory, reporting whether one existed
    pub fn remove(install_dir: &Path) -> Result<bool> {
        let path = Self::path_in(install_dir);
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path).map_err(|e| AppstageError::FileRemoveFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(true)
    }
}
