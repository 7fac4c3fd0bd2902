use std::path::PathBuf;

use thiserror::Error;

pub type CoffreResult<T> = Result<T, CoffreError>;

/// Error taxonomy for the encryption core.
///
/// Every variant is terminal for the current operation: retrying with the
/// same inputs cannot succeed, so callers must correct the key or the file
/// and reissue the call.
#[derive(Debug, Error)]
pub enum CoffreError {
    #[error("source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Wrong key and tampered ciphertext are deliberately indistinguishable.
    #[error("authentication failed: wrong key or corrupted container")]
    AuthenticationFailed,

    #[error("corrupted envelope: {0}")]
    EnvelopeCorrupt(String),

    #[error("corrupted metadata: {0}")]
    MetadataCorrupt(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
