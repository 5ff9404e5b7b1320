//! Read-only installation status query
//!
//! Gathers state, identifier and install path without acquiring the lock and
//! without touching anything on disk.

use std::path::PathBuf;

use crate::installer::Installer;
use crate::state::InstallState;

/// Snapshot of the installation status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub state: InstallState,
    pub identifier: String,
    pub install_dir: PathBuf,
}

impl StatusReport {
    /// Render the report as plain text, one field per line
    pub fn render(&self) -> String {
        format!(
            "Status: {}\nIdentifier: {}\nDirectory: {}\n",
            self.state.label(),
            self.identifier,
            self.install_dir.display()
        )
    }
}

/// Query the current installation status
pub fn check_install<I: Installer>(installer: &I) -> StatusReport {
    StatusReport {
        state: installer.detect_state(),
        identifier: installer.identifier().to_string(),
        install_dir: installer.install_dir().to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::product::ProductIdentity;
    use semver::Version;
    use std::cell::Cell;
    use std::path::Path;

    struct ReadOnlyInstaller {
        product: ProductIdentity,
        dir: PathBuf,
        state: InstallState,
        mutations: Cell<usize>,
    }

    impl ReadOnlyInstaller {
        fn new(state: InstallState) -> Self {
            Self {
                product: ProductIdentity::new(
                    "Appstage",
                    "dev.appstage.app",
                    Version::new(1, 4, 2),
                ),
                dir: PathBuf::from("/data/apps/Appstage"),
                state,
                mutations: Cell::new(0),
            }
        }
    }

    impl Installer for ReadOnlyInstaller {
        fn product(&self) -> &ProductIdentity {
            &self.product
        }

        fn install_dir(&self) -> &Path {
            &self.dir
        }

        fn detect_state(&self) -> InstallState {
            self.state
        }

        fn install(&self) -> Result<()> {
            self.mutations.set(self.mutations.get() + 1);
            Ok(())
        }

        fn uninstall(&self) -> Result<()> {
            self.mutations.set(self.mutations.get() + 1);
            Ok(())
        }

        fn uninstall_shared_component(&self) -> Result<()> {
            self.mutations.set(self.mutations.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_check_install_gathers_fields_without_mutating() {
        for state in [
            InstallState::NotInstalled,
            InstallState::Installed,
            InstallState::HigherVersionFound,
        ] {
            let installer = ReadOnlyInstaller::new(state);
            let report = check_install(&installer);

            assert_eq!(report.state, state);
            assert_eq!(report.identifier, "dev.appstage.app");
            assert_eq!(report.install_dir, PathBuf::from("/data/apps/Appstage"));
            assert_eq!(installer.mutations.get(), 0);
        }
    }

    #[test]
    fn test_render_lists_all_fields() {
        let installer = ReadOnlyInstaller::new(InstallState::Installed);
        let rendered = check_install(&installer).render();

        assert!(rendered.contains("Status: Installed and up to date"));
        assert!(rendered.contains("Identifier: dev.appstage.app"));
        assert!(rendered.contains("Directory: /data/apps/Appstage"));
    }

    #[test]
    fn test_render_not_installed() {
        let installer = ReadOnlyInstaller::new(InstallState::NotInstalled);
        let rendered = check_install(&installer).render();
        assert!(rendered.contains("Status: Not installed"));
    }
}
