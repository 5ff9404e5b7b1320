//! Display functions for lifecycle outcomes and status reports

use console::Style;

use crate::operations::status::StatusReport;

/// Print a highlighted prompt title before an interactive question
pub fn print_prompt_title(title: &str) {
    println!("{}", Style::new().bold().yellow().apply_to(title));
}

/// Print an informational notification with a title line
pub fn notify(title: &str, message: &str) {
    println!("{}", Style::new().bold().green().apply_to(title));
    println!("{message}");
}

/// Print the "nothing to do" line for an install that found the same version
pub fn print_already_current(display_name: &str, version: &str) {
    println!(
        "{} {} is already installed and up to date.",
        Style::new().bold().apply_to(display_name),
        version,
    );
}

/// Print the uninstall summary
pub fn print_uninstall_summary(display_name: &str, removed_shared: bool) {
    println!(
        "{} has been uninstalled.",
        Style::new().bold().apply_to(display_name)
    );
    if removed_shared {
        println!("  {}", Style::new().dim().apply_to("shared runtime removed"));
    } else {
        println!("  {}", Style::new().dim().apply_to("shared runtime kept"));
    }
}

/// Print a status report with a styled header
pub fn print_status_report(report: &StatusReport) {
    println!(
        "{}",
        Style::new().bold().apply_to("Installation status")
    );
    print!("{}", report.render());
}
