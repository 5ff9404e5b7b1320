//! Error types and handling for appstage
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for appstage operations
#[derive(Error, Diagnostic, Debug)]
pub enum AppstageError {
    // Lifecycle errors
    #[error("installation cancelled")]
    #[diagnostic(code(appstage::lifecycle::cancelled))]
    Cancelled,

    #[error("{product} is already running")]
    #[diagnostic(
        code(appstage::lifecycle::already_running),
        help("Close the running instance and try again")
    )]
    AlreadyRunning { product: String },

    #[error("{product} is already installed with a higher version ({installed})")]
    #[diagnostic(
        code(appstage::lifecycle::newer_version_installed),
        help("Uninstall the newer version first if you really want this package version")
    )]
    NewerVersionInstalled { product: String, installed: String },

    // Lock errors
    #[error("Failed to open instance lock: {reason}")]
    #[diagnostic(code(appstage::lock::open_failed))]
    LockFailed { reason: String },

    // File system errors
    #[error("Failed to prepare install directory: {path}")]
    #[diagnostic(code(appstage::fs::install_dir_failed))]
    InstallDirFailed { path: String, reason: String },

    #[error("No install directory available for this platform")]
    #[diagnostic(
        code(appstage::fs::no_install_dir),
        help("Pass --install-dir or set APPSTAGE_INSTALL_DIR")
    )]
    NoInstallDir,

    #[error("Failed to read payload: {path}")]
    #[diagnostic(code(appstage::fs::payload_read_failed))]
    PayloadReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(appstage::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to remove file: {path}")]
    #[diagnostic(code(appstage::fs::remove_failed))]
    FileRemoveFailed { path: String, reason: String },

    #[error("Failed to write install manifest: {path}")]
    #[diagnostic(code(appstage::manifest::write_failed))]
    ManifestWriteFailed { path: String, reason: String },

    // Interaction errors
    #[error("Failed to read response: {reason}")]
    #[diagnostic(code(appstage::prompt::failed))]
    PromptFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(appstage::fs::io_error))]
    IoError { message: String },
}

impl AppstageError {
    /// Errors the caller must not print: the human already made the call.
    pub fn is_silent(&self) -> bool {
        matches!(self, AppstageError::Cancelled)
    }
}

impl From<std::io::Error> for AppstageError {
    fn from(err: std::io::Error) -> Self {
        AppstageError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AppstageError>;
