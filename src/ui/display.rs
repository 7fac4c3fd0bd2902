//! Display utilities for the terminal shell.

use std::path::Path;

use anyhow::Result;
use console::{Term, style};

use crate::types::Mode;

/// Displays a freshly generated key with the save-it-now warning.
///
/// The key exists nowhere else: it is shown exactly once and cannot be
/// recovered from the container.
pub fn show_generated_key(key_display: &str) {
    println!();
    println!("{} {}", style("✓").green(), style("Encryption key generated:").bold());
    println!();
    println!("    {}", style(key_display).cyan().bold());
    println!();
    println!("{} {}", style("!").yellow().bold(), style("Save this key now. It cannot be recovered if lost.").yellow());
}

/// Displays the outcome of a successful operation.
pub fn show_success(mode: Mode, path: &Path) {
    println!();
    println!("{} {}", style("✓").green(), style(format!("File {} successfully: {}", mode.past_tense(), path.display())).bold());
}

/// Reports that a supplied key parsed cleanly.
pub fn show_key_valid() {
    println!("{} {}", style("✓").green(), style("Key is valid.").bold());
}

/// Clears the terminal screen.
pub fn clear_screen() -> Result<()> {
    let term = Term::stdout();
    term.clear_screen().map_err(|e| anyhow::anyhow!("failed to clear screen: {e}"))
}

/// Prints the application banner.
pub fn print_banner() {
    let banner = r"
              __  __
  ___ ___    / _|/ _|_ __ ___
 / __/ _ \  | |_| |_| '__/ _ \
| (_| (_) | |  _|  _| | |  __/
 \___\___/  |_| |_| |_|  \___|
";

    println!("{}", style(banner).green().bold());
    println!("{}", style("Seal a file into an encrypted container, or restore one.").dim());
}
