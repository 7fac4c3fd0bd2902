//! File pipeline: orchestrates reading, envelope assembly, the cipher, and
//! the output write for both directions.
//!
//! Each call is synchronous and self-contained; the whole file is held in
//! memory for the duration of the operation. Every validation and
//! transformation completes before the single output write, so a failing
//! call never leaves a partial file behind.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cipher::{CipherAlgorithm, XChaCha};
use crate::config::{ENCRYPTED_EXTENSION, OUTPUT_DIR};
use crate::envelope::{build_envelope, split_envelope};
use crate::error::{CoffreError, CoffreResult};
use crate::key::SymmetricKey;
use crate::metadata::FileMetadata;

/// Encrypt/decrypt orchestrator bound to one output directory.
///
/// Stateless across calls apart from the directory path; safe to reuse
/// for any number of operations.
pub struct Pipeline {
    output_dir: PathBuf,
}

impl Pipeline {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    /// Encrypts `source` under `key` and writes `<stem>.enc` into the
    /// output directory.
    ///
    /// An existing output of the same name is overwritten silently.
    ///
    /// # Errors
    ///
    /// [`CoffreError::SourceNotFound`] when `source` does not exist, plus
    /// any I/O or cipher failure from the layers below.
    pub fn encrypt_file(&self, source: &Path, key: &SymmetricKey) -> CoffreResult<PathBuf> {
        if !source.exists() {
            return Err(CoffreError::SourceNotFound(source.to_path_buf()));
        }

        let data = fs::read(source)?;
        let metadata = FileMetadata::from_path(source);
        debug!(source = %source.display(), size = data.len(), "building envelope");

        let envelope = build_envelope(&metadata.encode()?, &data)?;
        let container = Self::cipher_for(key)?.encrypt(&envelope)?;

        let output_name = format!("{}.{ENCRYPTED_EXTENSION}", metadata.stem());
        let output = self.write_output(&output_name, &container)?;
        debug!(output = %output.display(), "container written");

        Ok(output)
    }

    /// Decrypts a container under `key` and restores the original bytes as
    /// `<original_stem>_decrypted<original_extension>` in the output
    /// directory.
    ///
    /// # Errors
    ///
    /// [`CoffreError::SourceNotFound`] when `source` does not exist;
    /// [`CoffreError::AuthenticationFailed`],
    /// [`CoffreError::EnvelopeCorrupt`], and
    /// [`CoffreError::MetadataCorrupt`] propagate from the lower layers
    /// undowngraded.
    pub fn decrypt_file(&self, source: &Path, key: &SymmetricKey) -> CoffreResult<PathBuf> {
        if !source.exists() {
            return Err(CoffreError::SourceNotFound(source.to_path_buf()));
        }

        let container = fs::read(source)?;
        let envelope = Self::cipher_for(key)?.decrypt(&container)?;

        let (metadata_bytes, file_bytes) = split_envelope(&envelope)?;
        let metadata = FileMetadata::decode(metadata_bytes)?;
        debug!(source = %source.display(), restored = %metadata.output_name(), "envelope authenticated");

        self.write_output(&metadata.output_name(), file_bytes)
    }

    /// The one place that names the concrete primitive.
    fn cipher_for(key: &SymmetricKey) -> CoffreResult<impl CipherAlgorithm> {
        XChaCha::new(key)
    }

    fn write_output(&self, name: &str, bytes: &[u8]) -> CoffreResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(name);
        fs::write(&path, bytes)?;

        Ok(path)
    }
}

impl Default for Pipeline {
    /// Pipeline writing to the fixed relative `outputs/` directory.
    fn default() -> Self {
        Self::new(OUTPUT_DIR)
    }
}
