//! CLI command implementations.

/// Read-only report of which listed files are still present.
pub mod status;

/// The deletion sweep itself.
pub mod sweep;

use crate::output::{self, Verbosity};
use colored::Colorize;

/// Prints a success line with a green check mark (respects quiet mode).
pub fn print_success(message: &str) {
    if output::get_verbosity() == Verbosity::Quiet {
        return;
    }
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints an informational line (respects quiet mode).
pub fn print_info(message: &str) {
    if output::get_verbosity() == Verbosity::Quiet {
        return;
    }
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Prints a warning line on stderr (always shown).
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}
