//! Common test utilities for appstage integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch install layout for integration tests
#[allow(dead_code)]
pub struct TestInstall {
    /// Temporary directory holding the whole layout
    pub temp: TempDir,
    /// Install directory passed to the binary
    pub install_dir: PathBuf,
}

#[allow(dead_code)]
impl TestInstall {
    /// Create a new scratch layout; the install directory itself is not
    /// created so the binary's own directory handling is exercised
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let install_dir = temp.path().join("install");
        Self { temp, install_dir }
    }

    /// Command for the appstage binary pointed at this layout
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("appstage").expect("Failed to find appstage binary");
        cmd.env_remove("APPSTAGE_INSTALL_DIR");
        cmd.arg("-d").arg(&self.install_dir);
        cmd
    }

    /// Create a payload directory with a couple of files
    pub fn create_payload(&self) -> PathBuf {
        let payload = self.temp.path().join("payload");
        std::fs::create_dir_all(payload.join("assets")).expect("Failed to create payload dir");
        std::fs::write(payload.join("appstage-app"), b"#!/bin/sh\n")
            .expect("Failed to write payload file");
        std::fs::write(payload.join("assets/icon.png"), b"png")
            .expect("Failed to write payload file");
        payload
    }

    /// The shared runtime directory sits beside the install directory
    pub fn shared_dir(&self) -> PathBuf {
        self.temp.path().join("appstage-shared")
    }

    /// Path of the install manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.install_dir.join("manifest.json")
    }

    /// Write a manifest registering the given version with no files
    pub fn write_manifest(&self, version: &str) {
        std::fs::create_dir_all(&self.install_dir).expect("Failed to create install dir");
        let content = format!(
            r#"{{"identifier":"dev.appstage.app","display_name":"Appstage","version":"{version}","files":[]}}"#
        );
        std::fs::write(self.manifest_path(), content).expect("Failed to write manifest");
    }
}
