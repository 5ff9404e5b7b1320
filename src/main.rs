//! appstage - installer lifecycle manager
//!
//! Detects the installation state of the product relative to this package,
//! enforces single-instance exclusion across processes, and drives the
//! matching install, upgrade or uninstall transition.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod installer;
mod interaction;
mod lock;
mod manifest;
mod operations;
mod product;
mod progress;
mod state;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.install_dir, args),
        Commands::Uninstall(args) => commands::uninstall::run(cli.install_dir, args),
        Commands::Status => commands::status::run(cli.install_dir),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        // A cancelled run already said everything there is to say.
        if !e.is_silent() {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}
