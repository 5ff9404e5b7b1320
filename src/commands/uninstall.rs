//! Uninstall command CLI wrapper
//!
//! Chooses between interactive prompts and flag-preset answers, then
//! delegates to the lifecycle coordinator.

use std::path::PathBuf;

use crate::cli::UninstallArgs;
use crate::error::Result;
use crate::installer::{DirInstaller, Installer, PayloadSource};
use crate::interaction::{Answer, ConsoleInteraction, Interaction, PresetAnswers, RetryChoice};
use crate::lock::FileLock;
use crate::operations::lifecycle::Lifecycle;
use crate::product::{self, ProductIdentity};
use crate::ui::display;

/// Run uninstall command
pub fn run(install_dir: Option<PathBuf>, args: UninstallArgs) -> Result<()> {
    let product = ProductIdentity::current();
    let install_dir = product::resolve_install_dir(install_dir)?;

    let installer = DirInstaller::new(product, install_dir, PayloadSource::CurrentExe);

    // The flags answer the shared-component question up front; without them
    // the human answers at the prompt. A flag-driven run cannot ask about
    // lock contention either, so it gives up instead of retrying.
    if args.remove_shared || args.keep_shared {
        let answer = if args.remove_shared {
            Answer::Yes
        } else {
            Answer::No
        };
        run_with(&installer, &PresetAnswers::new(RetryChoice::Cancel, answer))
    } else {
        run_with(&installer, &ConsoleInteraction)
    }
}

fn run_with<U: Interaction>(installer: &DirInstaller, interaction: &U) -> Result<()> {
    let mut lock = FileLock::in_dir(installer.install_dir());

    let outcome = Lifecycle::new(installer, &mut lock, interaction).run_uninstall()?;

    display::print_uninstall_summary(&installer.product().display_name, outcome.removed_shared);
    Ok(())
}
