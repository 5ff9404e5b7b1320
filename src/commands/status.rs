//! Status command CLI wrapper
//!
//! Read-only: reports state, identifier and install directory without taking
//! the instance lock or creating anything.

use std::path::PathBuf;

use crate::error::Result;
use crate::installer::{DirInstaller, PayloadSource};
use crate::operations::status;
use crate::product::{self, ProductIdentity};
use crate::ui::display;

/// Run status command
pub fn run(install_dir: Option<PathBuf>) -> Result<()> {
    let product = ProductIdentity::current();
    let install_dir = product::resolve_install_dir(install_dir)?;

    let installer = DirInstaller::new(product, install_dir, PayloadSource::CurrentExe);
    let report = status::check_install(&installer);

    display::print_status_report(&report);
    Ok(())
}
