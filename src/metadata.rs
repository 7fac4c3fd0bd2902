//! Metadata codec for the record embedded inside every container.
//!
//! The record remembers the original base name and extension so decryption
//! can restore the filename without any side channel. It is serialized as
//! compact JSON; field order is fixed by the struct, which keeps the
//! encoding deterministic and the envelope size exact.

use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::config::DECRYPTED_SUFFIX;
use crate::error::{CoffreError, CoffreResult};

/// Original-name record carried inside the encrypted payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    original_stem: String,

    /// Extension with its leading dot, or empty when the source had none.
    #[serde(default)]
    original_extension: String,
}

impl FileMetadata {
    pub fn new(stem: impl Into<String>, extension: impl Into<String>) -> Self {
        Self { original_stem: stem.into(), original_extension: extension.into() }
    }

    /// Derives the record from a source path's basename.
    ///
    /// Non-UTF-8 names are converted lossily; the decrypted output keeps
    /// whatever survived the conversion.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let stem = path.file_stem().map_or_else(|| "unnamed".to_owned(), |s| s.to_string_lossy().into_owned());

        let extension = path.extension().map_or_else(String::new, |e| format!(".{}", e.to_string_lossy()));

        Self { original_stem: stem, original_extension: extension }
    }

    /// Serializes the record to its canonical byte form.
    pub fn encode(&self) -> CoffreResult<Vec<u8>> {
        let bytes = serde_json::to_vec(self).context("metadata serialization failed")?;
        Ok(bytes)
    }

    /// Parses a record out of an authenticated envelope.
    pub fn decode(bytes: &[u8]) -> CoffreResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| CoffreError::MetadataCorrupt(e.to_string()))
    }

    #[inline]
    #[must_use]
    pub fn stem(&self) -> &str {
        &self.original_stem
    }

    #[inline]
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.original_extension
    }

    /// Filename for the decrypted output: `<stem>_decrypted<extension>`.
    #[must_use]
    pub fn output_name(&self) -> String {
        format!("{}{}{}", self.original_stem, DECRYPTED_SUFFIX, self.original_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_with_extension() {
        let metadata = FileMetadata::from_path(Path::new("/tmp/report.pdf"));
        assert_eq!(metadata.stem(), "report");
        assert_eq!(metadata.extension(), ".pdf");
    }

    #[test]
    fn test_from_path_without_extension() {
        let metadata = FileMetadata::from_path(Path::new("/tmp/README"));
        assert_eq!(metadata.stem(), "README");
        assert_eq!(metadata.extension(), "");
    }

    #[test]
    fn test_from_path_multiple_dots() {
        // Only the final extension is split off, as with Path::extension.
        let metadata = FileMetadata::from_path(Path::new("archive.tar.gz"));
        assert_eq!(metadata.stem(), "archive.tar");
        assert_eq!(metadata.extension(), ".gz");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let metadata = FileMetadata::new("report", ".pdf");
        assert_eq!(metadata.encode().unwrap(), metadata.encode().unwrap());
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let metadata = FileMetadata::new("notes", ".txt");
        let decoded = FileMetadata::decode(&metadata.encode().unwrap()).unwrap();
        assert_eq!(decoded, metadata);
    }

    #[test]
    fn test_decode_missing_extension_defaults_to_empty() {
        let decoded = FileMetadata::decode(br#"{"original_stem":"README"}"#).unwrap();
        assert_eq!(decoded.stem(), "README");
        assert_eq!(decoded.extension(), "");
    }

    #[test]
    fn test_decode_rejects_junk() {
        let result = FileMetadata::decode(b"\xffnot json");
        assert!(matches!(result, Err(CoffreError::MetadataCorrupt(_))));
    }

    #[test]
    fn test_decode_rejects_missing_stem() {
        let result = FileMetadata::decode(br#"{"original_extension":".pdf"}"#);
        assert!(matches!(result, Err(CoffreError::MetadataCorrupt(_))));
    }

    #[test]
    fn test_output_name() {
        assert_eq!(FileMetadata::new("report", ".pdf").output_name(), "report_decrypted.pdf");
        assert_eq!(FileMetadata::new("README", "").output_name(), "README_decrypted");
    }
}
