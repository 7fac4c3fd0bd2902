//! XChaCha20-Poly1305 implementation of the cipher seam.
//!
//! Ciphertext format: `[Nonce (24B)] || [Ciphertext] || [Auth Tag (16B)]`.
//! The extended 192-bit nonce makes random generation safe without any
//! counter management, which keeps the engine stateless; the nonce rides
//! in front of the ciphertext so the container stays self-contained.

use chacha20poly1305::aead::{Aead, KeyInit, OsRng};
use chacha20poly1305::{AeadCore, XChaCha20Poly1305, XNonce};

use crate::cipher::CipherAlgorithm;
use crate::config::{NONCE_SIZE, TAG_SIZE};
use crate::error::{CoffreError, CoffreResult};
use crate::key::SymmetricKey;

pub struct XChaCha {
    inner: XChaCha20Poly1305,
}

impl XChaCha {
    /// Initializes the cipher for one operation under `key`.
    pub fn new(key: &SymmetricKey) -> CoffreResult<Self> {
        let inner = XChaCha20Poly1305::new_from_slice(key.expose()).map_err(|_| CoffreError::InvalidKey("key has the wrong length for XChaCha20-Poly1305".to_owned()))?;
        Ok(Self { inner })
    }
}

impl CipherAlgorithm for XChaCha {
    fn encrypt(&self, plaintext: &[u8]) -> CoffreResult<Vec<u8>> {
        // A fresh nonce per call; never reused across operations.
        let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);

        let mut result = self.inner.encrypt(&nonce, plaintext).map_err(|_| anyhow::anyhow!("xchacha20poly1305 encryption failed"))?;

        // Prepend the nonce; the recipient needs it to decrypt.
        result.splice(0..0, nonce.iter().copied());

        Ok(result)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> CoffreResult<Vec<u8>> {
        // Anything shorter than nonce + tag cannot be a valid container.
        // Reported as an authentication failure so truncation is
        // indistinguishable from any other tampering.
        if ciphertext.len() < NONCE_SIZE + TAG_SIZE {
            return Err(CoffreError::AuthenticationFailed);
        }

        let (nonce, data) = ciphertext.split_at(NONCE_SIZE);

        self.inner.decrypt(XNonce::from_slice(nonce), data).map_err(|_| CoffreError::AuthenticationFailed)
    }
}
