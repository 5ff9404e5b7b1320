//! Install command CLI wrapper
//!
//! Wires the production installer, lock and prompts together and delegates
//! all decision logic to the lifecycle coordinator.

use std::path::PathBuf;

use crate::cli::InstallArgs;
use crate::error::Result;
use crate::installer::{DirInstaller, Installer, PayloadSource};
use crate::interaction::ConsoleInteraction;
use crate::lock::FileLock;
use crate::operations::lifecycle::{InstallOutcome, Lifecycle};
use crate::product::{self, ProductIdentity};
use crate::ui::display;

/// Run install command
pub fn run(install_dir: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let product = ProductIdentity::current();
    let install_dir = product::resolve_install_dir(install_dir)?;

    let payload = match args.payload {
        Some(dir) => PayloadSource::Directory(dir),
        None => PayloadSource::CurrentExe,
    };

    let installer = DirInstaller::new(product, install_dir, payload);
    let mut lock = FileLock::in_dir(installer.install_dir());
    let interaction = ConsoleInteraction;

    let outcome = Lifecycle::new(&installer, &mut lock, &interaction).run_install()?;

    if let InstallOutcome::AlreadyCurrent { version } = outcome {
        display::print_already_current(&installer.product().display_name, &version);
    }

    Ok(())
}
