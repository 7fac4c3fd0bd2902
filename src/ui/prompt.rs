//! Interactive prompts for the wizard mode.

use std::path::PathBuf;

use anyhow::{Result, ensure};
use inquire::{Password, PasswordDisplayMode, Select, Text};

use crate::types::Mode;

/// Asks whether to encrypt or decrypt.
pub fn select_mode() -> Result<Mode> {
    let mode = Select::new("What do you want to do?", Mode::ALL.to_vec()).prompt()?;
    Ok(mode)
}

/// Asks for the path of the file to process.
pub fn input_path(message: &str) -> Result<PathBuf> {
    let path = Text::new(message).prompt()?;
    let trimmed = path.trim();

    ensure!(!trimmed.is_empty(), "no file path entered");

    Ok(PathBuf::from(trimmed))
}

/// Collects the key string for decryption.
///
/// Masked entry; validation happens in the core, not here.
pub fn input_key() -> Result<String> {
    let key = Password::new("Encryption key:").with_display_mode(PasswordDisplayMode::Masked).without_confirmation().prompt()?;
    Ok(key)
}
