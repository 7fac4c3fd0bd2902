//! Symmetric key generation, validation, and display encoding.
//!
//! Keys are opaque 256-bit random tokens, never derived from passwords.
//! The display form is URL-safe base64 so a key survives a copy-paste
//! round trip losslessly: `parse(k.to_display()) == k` for every
//! generated `k`.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use chacha20poly1305::aead::OsRng;
use chacha20poly1305::{KeyInit, XChaCha20Poly1305};
use secrecy::{ExposeSecret, SecretBox};
use subtle::ConstantTimeEq;

use crate::config::KEY_SIZE;
use crate::error::{CoffreError, CoffreResult};

/// A 256-bit symmetric key held in zeroizing storage.
///
/// Created once by [`SymmetricKey::generate`] or recovered from user input
/// by [`SymmetricKey::parse`]; the core never persists it.
pub struct SymmetricKey {
    inner: SecretBox<[u8; KEY_SIZE]>,
}

impl SymmetricKey {
    /// Generates a fresh key from the OS CSPRNG.
    ///
    /// Each call returns an independent, unpredictable key.
    #[must_use]
    pub fn generate() -> Self {
        let key = XChaCha20Poly1305::generate_key(&mut OsRng);
        Self::from_bytes(key.into())
    }

    /// Validates externally supplied key material.
    ///
    /// Accepts either raw key bytes or the display-string form. Anything
    /// else is rejected with [`CoffreError::InvalidKey`] carrying the
    /// underlying reason; malformed input is never coerced into a
    /// usable key.
    pub fn parse(input: impl AsRef<[u8]>) -> CoffreResult<Self> {
        let raw = input.as_ref();

        // Raw 32-byte form, as handed back by callers that kept the bytes.
        if raw.len() == KEY_SIZE {
            let bytes: [u8; KEY_SIZE] = raw.try_into().map_err(|_| CoffreError::InvalidKey("key bytes have the wrong length".to_owned()))?;
            return Ok(Self::from_bytes(bytes));
        }

        // Otherwise the input must be the textual display form.
        let text = std::str::from_utf8(raw).map_err(|_| CoffreError::InvalidKey("key string is not valid UTF-8".to_owned()))?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CoffreError::InvalidKey("key string is empty".to_owned()));
        }

        let decoded = URL_SAFE.decode(trimmed).map_err(|e| CoffreError::InvalidKey(format!("key string is not valid base64: {e}")))?;

        let bytes: [u8; KEY_SIZE] = decoded.as_slice().try_into().map_err(|_| CoffreError::InvalidKey(format!("decoded key must be {KEY_SIZE} bytes, got {}", decoded.len())))?;

        Ok(Self::from_bytes(bytes))
    }

    /// Lossless textual form of the key, suitable for copy-paste.
    #[must_use]
    pub fn to_display(&self) -> String {
        URL_SAFE.encode(self.expose())
    }

    /// Grants read access to the raw key bytes.
    #[inline]
    #[must_use]
    pub fn expose(&self) -> &[u8; KEY_SIZE] {
        self.inner.expose_secret()
    }

    fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { inner: SecretBox::new(Box::new(bytes)) }
    }
}

impl Clone for SymmetricKey {
    fn clone(&self) -> Self {
        Self::from_bytes(*self.expose())
    }
}

impl PartialEq for SymmetricKey {
    /// Constant-time comparison of the raw key bytes.
    fn eq(&self, other: &Self) -> bool {
        self.expose().as_slice().ct_eq(other.expose().as_slice()).into()
    }
}

impl Eq for SymmetricKey {}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SymmetricKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_keys_are_distinct() {
        let a = SymmetricKey::generate();
        let b = SymmetricKey::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_roundtrip() {
        let key = SymmetricKey::generate();
        let display = key.to_display();

        // 32 bytes of padded URL-safe base64.
        assert_eq!(display.len(), 44);

        let parsed = SymmetricKey::parse(&display).unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn test_parse_raw_bytes() {
        let key = SymmetricKey::generate();
        let parsed = SymmetricKey::parse(key.expose()).unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let key = SymmetricKey::generate();
        let padded = format!("  {}\n", key.to_display());
        assert_eq!(SymmetricKey::parse(&padded).unwrap(), key);
    }

    #[test]
    fn test_parse_rejects_empty() {
        let result = SymmetricKey::parse("");
        assert!(matches!(result, Err(CoffreError::InvalidKey(_))));
    }

    #[test]
    fn test_parse_rejects_bad_base64() {
        let result = SymmetricKey::parse("not base64 at all!!!");
        assert!(matches!(result, Err(CoffreError::InvalidKey(_))));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        // Valid base64, but decodes to fewer than 32 bytes.
        let result = SymmetricKey::parse(URL_SAFE.encode([0u8; 16]));
        assert!(matches!(result, Err(CoffreError::InvalidKey(_))));
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = SymmetricKey::generate();
        let debug = format!("{key:?}");
        assert!(!debug.contains(&key.to_display()));
        assert!(debug.contains("REDACTED"));
    }
}
