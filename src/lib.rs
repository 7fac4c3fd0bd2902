//! coffre - single-file authenticated encryption with filename recovery.
//!
//! Seals a file into a self-describing encrypted container:
//! - XChaCha20-Poly1305 authenticated encryption under a random 256-bit key
//! - the original base name and extension travel inside the encrypted
//!   payload, so decryption restores the filename without any side channel
//! - keys are opaque random tokens with a lossless copy-pasteable text form
//!
//! The core is the four operations re-exported below; the `app` and `ui`
//! modules are a thin terminal shell over them.

pub mod app;
pub mod cipher;
pub mod config;
pub mod envelope;
pub mod error;
pub mod key;
pub mod metadata;
pub mod pipeline;
pub mod types;
pub mod ui;

pub use error::{CoffreError, CoffreResult};
pub use key::SymmetricKey;
pub use metadata::FileMetadata;
pub use pipeline::Pipeline;
