//! Installer capability and the directory-based production implementation
//!
//! The lifecycle coordinator only sequences; everything that actually touches
//! the payload goes through the `Installer` trait. `DirInstaller` is the
//! production implementation: it copies a payload into the install directory,
//! records what it copied in the install manifest, and undoes exactly that on
//! uninstall.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use semver::Version;
use walkdir::WalkDir;

use crate::error::{AppstageError, Result};
use crate::manifest::InstallManifest;
use crate::product::{self, ProductIdentity};
use crate::progress::ProgressDisplay;
use crate::state::{self, InstallState};

/// Capability the lifecycle coordinator drives
pub trait Installer {
    /// Identity of the product this installer applies
    fn product(&self) -> &ProductIdentity;

    /// Stable product identifier
    fn identifier(&self) -> &str {
        &self.product().identifier
    }

    /// Directory the product installs into
    fn install_dir(&self) -> &Path;

    /// Classify the current system against the package. Side-effect-free.
    fn detect_state(&self) -> InstallState;

    /// Version currently registered on disk, if one is readable
    fn installed_version(&self) -> Option<Version> {
        None
    }

    /// Install the payload and record the manifest
    fn install(&self) -> Result<()>;

    /// Remove manifest-listed files and the manifest itself
    fn uninstall(&self) -> Result<()>;

    /// Remove the optional shared runtime component
    fn uninstall_shared_component(&self) -> Result<()>;
}

/// Where the files to install come from
#[derive(Debug, Clone)]
pub enum PayloadSource {
    /// Install the running executable itself
    CurrentExe,

    /// Install every file under a directory, preserving relative paths
    Directory(PathBuf),
}

/// Production installer working against a plain install directory
#[derive(Debug)]
pub struct DirInstaller {
    product: ProductIdentity,
    install_dir: PathBuf,
    payload: PayloadSource,
    shared_dir: PathBuf,
}

impl DirInstaller {
    /// Create an installer for a product, install directory and payload
    pub fn new(product: ProductIdentity, install_dir: PathBuf, payload: PayloadSource) -> Self {
        let shared_dir = product::shared_component_dir(&install_dir);
        Self {
            product,
            install_dir,
            payload,
            shared_dir,
        }
    }

    /// Override the shared component location
    pub fn with_shared_dir(mut self, shared_dir: PathBuf) -> Self {
        self.shared_dir = shared_dir;
        self
    }

    /// Location of the shared runtime component
    pub fn shared_dir(&self) -> &Path {
        &self.shared_dir
    }

    /// Enumerate payload files as (absolute source, relative target) pairs
    fn payload_entries(&self) -> Result<Vec<(PathBuf, PathBuf)>> {
        match &self.payload {
            PayloadSource::CurrentExe => {
                let exe = env::current_exe().map_err(|e| AppstageError::PayloadReadFailed {
                    path: "current executable".to_string(),
                    reason: e.to_string(),
                })?;
                let name = exe
                    .file_name()
                    .map(PathBuf::from)
                    .ok_or_else(|| AppstageError::PayloadReadFailed {
                        path: exe.display().to_string(),
                        reason: "executable has no file name".to_string(),
                    })?;
                Ok(vec![(exe, name)])
            }
            PayloadSource::Directory(dir) => {
                let mut entries = Vec::new();
                for entry in WalkDir::new(dir).sort_by_file_name() {
                    let entry = entry.map_err(|e| AppstageError::PayloadReadFailed {
                        path: dir.display().to_string(),
                        reason: e.to_string(),
                    })?;
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let relative = entry
                        .path()
                        .strip_prefix(dir)
                        .map_err(|e| AppstageError::PayloadReadFailed {
                            path: entry.path().display().to_string(),
                            reason: e.to_string(),
                        })?
                        .to_path_buf();
                    entries.push((entry.path().to_path_buf(), relative));
                }
                Ok(entries)
            }
        }
    }

    /// Remove files recorded by a previous install so a shrinking payload
    /// cannot leave orphans behind
    fn remove_recorded_files(&self, manifest: &InstallManifest) -> Result<()> {
        for relative in &manifest.files {
            let path = self.install_dir.join(relative);
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(AppstageError::FileRemoveFailed {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn copy_entry(&self, source: &Path, relative: &Path) -> Result<()> {
        let target = self.install_dir.join(relative);
        ensure_parent_dir(&target)?;
        fs::copy(source, &target).map_err(|e| AppstageError::FileWriteFailed {
            path: target.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

impl Installer for DirInstaller {
    fn product(&self) -> &ProductIdentity {
        &self.product
    }

    fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    fn detect_state(&self) -> InstallState {
        let installed = self.installed_version();
        state::classify(installed.as_ref(), &self.product.version)
    }

    fn installed_version(&self) -> Option<Version> {
        InstallManifest::installed_version(&self.install_dir)
    }

    fn install(&self) -> Result<()> {
        let entries = self.payload_entries()?;

        if let Some(previous) = InstallManifest::load(&self.install_dir) {
            self.remove_recorded_files(&previous)?;
        }

        let progress = ProgressDisplay::new(entries.len() as u64);
        for (source, relative) in &entries {
            progress.update_file(&relative.display().to_string());
            if let Err(e) = self.copy_entry(source, relative) {
                progress.abandon();
                return Err(e);
            }
            progress.inc();
        }
        progress.finish();

        let manifest = InstallManifest {
            identifier: self.product.identifier.clone(),
            display_name: self.product.display_name.clone(),
            version: self.product.version.to_string(),
            files: entries
                .iter()
                .map(|(_, relative)| relative.display().to_string())
                .collect(),
        };
        manifest.save(&self.install_dir)
    }

    fn uninstall(&self) -> Result<()> {
        // Nothing registered means nothing to do; uninstall stays idempotent.
        let Some(manifest) = InstallManifest::load(&self.install_dir) else {
            return Ok(());
        };

        self.remove_recorded_files(&manifest)?;
        InstallManifest::remove(&self.install_dir)?;

        // The directory itself stays: the caller may still hold the lock
        // file living inside it.
        Ok(())
    }

    fn uninstall_shared_component(&self) -> Result<()> {
        if !self.shared_dir.exists() {
            return Ok(());
        }

        fs::remove_dir_all(&self.shared_dir).map_err(|e| AppstageError::FileRemoveFailed {
            path: self.shared_dir.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Ensure parent directory exists for a path
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AppstageError::FileWriteFailed {
            path: parent.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}
