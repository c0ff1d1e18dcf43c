//! Diagnostic output for the command line.
//!
//! The prompt itself goes to stdout untouched; everything else goes to
//! stderr so a failing run never leaves half a prompt in the shell.

use colored::*;

/// Prints an error message to stderr
///
/// # Format
/// ```text
/// ✕ gitprompt: <message>
/// ```
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✕ gitprompt:".red(), message);
}
