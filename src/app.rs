use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::APP_NAME;
use crate::key::SymmetricKey;
use crate::pipeline::Pipeline;
use crate::types::Mode;
use crate::ui::{display, prompt};

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a fresh encryption key and print it.
    Generate,

    /// Encrypt a file into a self-describing container.
    Encrypt {
        #[arg(short, long)]
        input: String,

        /// Key to encrypt with; a fresh one is generated and shown when omitted.
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Decrypt a container and restore the original file.
    Decrypt {
        #[arg(short, long)]
        input: String,

        #[arg(short, long)]
        key: Option<String>,
    },

    /// Check whether a key string parses into a usable key.
    Validate {
        #[arg(short, long)]
        key: String,
    },

    Interactive,
}

#[derive(Parser)]
#[command(name = APP_NAME, version = "1.0.0", about = "Encrypt a file into a self-describing container that restores its original name on decryption.")]
pub struct App {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl App {
    pub fn init() -> Result<Self> {
        let subscriber = tracing_subscriber::fmt().with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(Self::parse())
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Generate) => {
                let key = SymmetricKey::generate();
                display::show_generated_key(&key.to_display());
                Ok(())
            }
            Some(Commands::Encrypt { input, key }) => Self::run_encrypt(&input, key),
            Some(Commands::Decrypt { input, key }) => Self::run_decrypt(&input, key),
            Some(Commands::Validate { key }) => Self::run_validate(&key),
            Some(Commands::Interactive) | None => Self::run_interactive(),
        }
    }

    fn run_encrypt(input: &str, key: Option<String>) -> Result<()> {
        let key = match key {
            Some(text) => SymmetricKey::parse(text)?,
            None => {
                // No key supplied: generate one and show it exactly once.
                let key = SymmetricKey::generate();
                display::show_generated_key(&key.to_display());
                key
            }
        };

        let output = Pipeline::default().encrypt_file(Path::new(input), &key).with_context(|| format!("encryption failed: {input}"))?;

        display::show_success(Mode::Encrypt, &output);

        Ok(())
    }

    fn run_decrypt(input: &str, key: Option<String>) -> Result<()> {
        let text = match key {
            Some(text) => text,
            None => prompt::input_key()?,
        };
        let key = SymmetricKey::parse(text)?;

        let output = Pipeline::default().decrypt_file(Path::new(input), &key).with_context(|| format!("decryption failed: {input}"))?;

        display::show_success(Mode::Decrypt, &output);

        Ok(())
    }

    fn run_validate(key: &str) -> Result<()> {
        SymmetricKey::parse(key)?;
        display::show_key_valid();
        Ok(())
    }

    fn run_interactive() -> Result<()> {
        display::clear_screen()?;
        display::print_banner();

        match prompt::select_mode()? {
            Mode::Encrypt => {
                let path = prompt::input_path("File to encrypt:")?;

                let key = SymmetricKey::generate();
                display::show_generated_key(&key.to_display());

                let output = Pipeline::default().encrypt_file(&path, &key).with_context(|| format!("encryption failed: {}", path.display()))?;

                display::show_success(Mode::Encrypt, &output);
            }
            Mode::Decrypt => {
                let path = prompt::input_path("Container to decrypt:")?;
                let key = SymmetricKey::parse(prompt::input_key()?)?;

                let output = Pipeline::default().decrypt_file(&path, &key).with_context(|| format!("decryption failed: {}", path.display()))?;

                display::show_success(Mode::Decrypt, &output);
            }
        }

        Ok(())
    }
}
