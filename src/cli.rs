//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// appstage - installer lifecycle manager
///
/// Install, upgrade and remove a product safely across concurrently running
/// instances.
#[derive(Parser, Debug)]
#[command(
    name = "appstage",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installer lifecycle manager",
    long_about = "Appstage detects the installation state of the product relative to this \
                  package, enforces single-instance exclusion across processes, and drives \
                  the matching install, upgrade or uninstall transition.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  appstage install\n    \
                  appstage install --payload ./dist\n    \
                  appstage uninstall --keep-shared\n    \
                  appstage status\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/appstage/appstage"
)]
pub struct Cli {
    /// Install directory (defaults to the platform data directory)
    #[arg(long, short = 'd', global = true, env = "APPSTAGE_INSTALL_DIR")]
    pub install_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the product onto this machine
    Install(InstallArgs),

    /// Remove the product from this machine
    Uninstall(UninstallArgs),

    /// Show the current installation status
    Status,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install this executable:\n    appstage install\n\n\
                  Install a payload directory:\n    appstage install --payload ./dist\n\n\
                  Install into a specific directory:\n    appstage install -d /opt/appstage")]
pub struct InstallArgs {
    /// Payload directory to install (defaults to the running executable)
    #[arg(long, value_name = "DIR")]
    pub payload: Option<PathBuf>,
}

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Uninstall interactively:\n    appstage uninstall\n\n\
                  Uninstall and keep the shared runtime:\n    appstage uninstall --keep-shared\n\n\
                  Uninstall everything without prompting:\n    appstage uninstall --remove-shared")]
pub struct UninstallArgs {
    /// Remove the shared runtime component without asking
    #[arg(long, conflicts_with = "keep_shared")]
    pub remove_shared: bool,

    /// Keep the shared runtime component without asking
    #[arg(long)]
    pub keep_shared: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    appstage completions --shell bash > ~/.bash_completion.d/appstage\n\n\
                  Generate zsh completions:\n    appstage completions --shell zsh > ~/.zfunc/_appstage")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
