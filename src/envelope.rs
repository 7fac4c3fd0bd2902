//! Envelope codec: the plaintext framing that gets encrypted as a unit.
//!
//! Layout: `[4-byte big-endian length][metadata bytes][original file bytes]`.
//! The length prefix counts the metadata block only, never itself and never
//! the file data. The whole envelope is the AEAD plaintext, so by the time
//! [`split_envelope`] runs the bytes are already authenticated; the length
//! check here guards the framing itself, not the transport.

use crate::config::LENGTH_PREFIX_SIZE;
use crate::error::{CoffreError, CoffreResult};

/// Assembles length prefix, metadata block, and file bytes in that order.
pub fn build_envelope(metadata: &[u8], file_bytes: &[u8]) -> CoffreResult<Vec<u8>> {
    let declared = u32::try_from(metadata.len()).map_err(|_| CoffreError::EnvelopeCorrupt(format!("metadata block of {} bytes does not fit the length prefix", metadata.len())))?;

    let mut envelope = Vec::with_capacity(LENGTH_PREFIX_SIZE + metadata.len() + file_bytes.len());
    envelope.extend_from_slice(&declared.to_be_bytes());
    envelope.extend_from_slice(metadata);
    envelope.extend_from_slice(file_bytes);

    Ok(envelope)
}

/// Splits an envelope back into its metadata block and file bytes.
///
/// Fails with [`CoffreError::EnvelopeCorrupt`] when the envelope cannot
/// satisfy its own declared length, so truncated frames never reach the
/// metadata decoder.
pub fn split_envelope(envelope: &[u8]) -> CoffreResult<(&[u8], &[u8])> {
    if envelope.len() < LENGTH_PREFIX_SIZE {
        return Err(CoffreError::EnvelopeCorrupt(format!("envelope of {} bytes is shorter than its length prefix", envelope.len())));
    }

    let (prefix, rest) = envelope.split_at(LENGTH_PREFIX_SIZE);
    let declared = prefix.try_into().map(u32::from_be_bytes).map_err(|_| CoffreError::EnvelopeCorrupt("unreadable length prefix".to_owned()))? as usize;

    if rest.len() < declared {
        return Err(CoffreError::EnvelopeCorrupt(format!("declared metadata length {declared} exceeds the {} available bytes", rest.len())));
    }

    Ok(rest.split_at(declared))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_layout() {
        let envelope = build_envelope(b"meta", b"data").unwrap();
        assert_eq!(&envelope[..4], &4u32.to_be_bytes());
        assert_eq!(&envelope[4..8], b"meta");
        assert_eq!(&envelope[8..], b"data");
    }

    #[test]
    fn test_split_roundtrip() {
        let envelope = build_envelope(b"metadata block", b"file contents").unwrap();
        let (metadata, data) = split_envelope(&envelope).unwrap();
        assert_eq!(metadata, b"metadata block");
        assert_eq!(data, b"file contents");
    }

    #[test]
    fn test_roundtrip_empty_file_bytes() {
        let envelope = build_envelope(b"meta", b"").unwrap();
        let (metadata, data) = split_envelope(&envelope).unwrap();
        assert_eq!(metadata, b"meta");
        assert!(data.is_empty());
    }

    #[test]
    fn test_split_rejects_short_envelope() {
        let result = split_envelope(&[0, 0]);
        assert!(matches!(result, Err(CoffreError::EnvelopeCorrupt(_))));
    }

    #[test]
    fn test_split_rejects_overdeclared_length() {
        // Claims 100 bytes of metadata but carries only 4.
        let mut envelope = 100u32.to_be_bytes().to_vec();
        envelope.extend_from_slice(b"meta");

        let result = split_envelope(&envelope);
        assert!(matches!(result, Err(CoffreError::EnvelopeCorrupt(_))));
    }

    #[test]
    fn test_split_exact_declared_length() {
        // Metadata consumes the whole envelope; file data is empty.
        let mut envelope = 4u32.to_be_bytes().to_vec();
        envelope.extend_from_slice(b"meta");

        let (metadata, data) = split_envelope(&envelope).unwrap();
        assert_eq!(metadata, b"meta");
        assert!(data.is_empty());
    }
}
