//! Lifecycle coordination for install and uninstall
//!
//! This is the state machine that decides which transition applies:
//! fresh install, overwrite upgrade, refusal because a newer version is
//! present, or plain uninstall. Detection and lock acquisition always
//! precede any mutating action; the action itself is delegated to the
//! `Installer`, and every human decision goes through the interaction port.
//!
//! Lock acquisition is bounded per attempt. When the resource stays
//! contended the human picks retry or cancel; a human who always retries
//! keeps the loop alive on purpose, so the only exits are acquisition and
//! cancellation.

use std::fs;
use std::time::Duration;

use crate::error::{AppstageError, Result};
use crate::installer::Installer;
use crate::interaction::{Answer, Interaction, RetryChoice};
use crate::lock::InstanceLock;
use crate::state::InstallState;

/// Bounded wait per lock acquisition attempt
pub const LOCK_ATTEMPT_TIMEOUT: Duration = Duration::from_millis(100);

/// What `run_install` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The payload was installed (fresh install or overwrite upgrade)
    Installed { version: String },

    /// The same version is already present; nothing was touched
    AlreadyCurrent { version: String },
}

/// What `run_uninstall` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallOutcome {
    /// Whether the shared runtime component was removed too
    pub removed_shared: bool,
}

/// Coordinator sequencing detection, locking and delegated actions
pub struct Lifecycle<'a, I, L, U>
where
    I: Installer,
    L: InstanceLock,
    U: Interaction,
{
    installer: &'a I,
    lock: &'a mut L,
    interaction: &'a U,
}

impl<'a, I, L, U> Lifecycle<'a, I, L, U>
where
    I: Installer,
    L: InstanceLock,
    U: Interaction,
{
    pub fn new(installer: &'a I, lock: &'a mut L, interaction: &'a U) -> Self {
        Self {
            installer,
            lock,
            interaction,
        }
    }

    /// Drive the install transition for the current state.
    ///
    /// `NotInstalled` (which also covers a registered older version) runs the
    /// retry loop and then installs. A newer installed version refuses
    /// immediately, before any lock attempt. The same version only proves no
    /// live instance exists: one lock attempt, no action.
    pub fn run_install(&mut self) -> Result<InstallOutcome> {
        self.ensure_install_dir()?;

        let product = self.installer.product().clone();
        let version = product.version.to_string();

        match self.installer.detect_state() {
            InstallState::NotInstalled => {
                self.acquire_or_abort()?;

                self.installer.install()?;
                self.interaction.notify(
                    "Installed",
                    &format!(
                        "{} is now installed! (version {})",
                        product.display_name, version
                    ),
                );
                Ok(InstallOutcome::Installed { version })
            }
            InstallState::HigherVersionFound => {
                let installed = self
                    .installer
                    .installed_version()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "unknown".to_string());

                Err(AppstageError::NewerVersionInstalled {
                    product: product.display_name,
                    installed,
                })
            }
            InstallState::Installed => {
                // One attempt only: the lock proves no live instance exists.
                if !self.lock.try_acquire(LOCK_ATTEMPT_TIMEOUT)? {
                    return Err(AppstageError::AlreadyRunning {
                        product: product.display_name,
                    });
                }

                Ok(InstallOutcome::AlreadyCurrent { version })
            }
        }
    }

    /// Drive the uninstall transition: lock with retry, remove, then offer
    /// removal of the shared runtime component.
    pub fn run_uninstall(&mut self) -> Result<UninstallOutcome> {
        self.ensure_install_dir()?;
        self.acquire_or_abort()?;

        self.installer.uninstall()?;

        let display_name = &self.installer.product().display_name;
        let answer = self.interaction.ask_yes_no(
            "Uninstalled",
            &format!(
                "{display_name} has been uninstalled.\n\
                 Remove the shared runtime component too? It may be used by other applications."
            ),
        )?;

        if answer != Answer::Yes {
            return Ok(UninstallOutcome {
                removed_shared: false,
            });
        }

        self.installer.uninstall_shared_component()?;
        Ok(UninstallOutcome {
            removed_shared: true,
        })
    }

    /// The lock file lives in the install directory, so the directory must
    /// exist before the first acquisition attempt.
    fn ensure_install_dir(&self) -> Result<()> {
        let dir = self.installer.install_dir();
        fs::create_dir_all(dir).map_err(|e| AppstageError::InstallDirFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Keep attempting bounded acquisitions until one succeeds or the human
    /// cancels. Cancel unwinds silently; the caller prints nothing.
    fn acquire_or_abort(&mut self) -> Result<()> {
        let display_name = self.installer.product().display_name.clone();

        loop {
            if self.lock.try_acquire(LOCK_ATTEMPT_TIMEOUT)? {
                return Ok(());
            }

            let title = format!("{display_name} is already running");
            let choice = self.interaction.ask_retry_or_cancel(
                &title,
                &format!("{display_name} is already running. Close it and retry."),
            )?;

            match choice {
                RetryChoice::Retry => continue,
                RetryChoice::Cancel => return Err(AppstageError::Cancelled),
            }
        }
    }
}
