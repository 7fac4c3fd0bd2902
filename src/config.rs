//! Global configuration constants.
//!
//! Every size, name, and directory used by the container format and the
//! shell lives here so the wire format is defined in exactly one place.

/// Application name used in user-facing output.
pub const APP_NAME: &str = "coffre";

/// Extension given to encrypted containers.
pub const ENCRYPTED_EXTENSION: &str = "enc";

/// Suffix inserted before the restored extension on decryption.
///
/// `report.pdf` becomes `report_decrypted.pdf`, a file without an
/// extension gets the bare suffix.
pub const DECRYPTED_SUFFIX: &str = "_decrypted";

/// Fixed relative directory that receives both encrypted and decrypted
/// outputs. Created on demand if absent.
pub const OUTPUT_DIR: &str = "outputs";

/// Size of symmetric keys in bytes.
///
/// 32 bytes (256 bits) matches the XChaCha20-Poly1305 key size and meets
/// current security recommendations with a comfortable margin.
pub const KEY_SIZE: usize = 32;

/// Size of the XChaCha20 nonce in bytes.
///
/// 24 bytes (192 bits) makes random nonce generation safe: the collision
/// probability stays negligible even across billions of containers.
pub const NONCE_SIZE: usize = 24;

/// Size of the Poly1305 authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// Size of the big-endian metadata length prefix inside the envelope.
pub const LENGTH_PREFIX_SIZE: usize = 4;
