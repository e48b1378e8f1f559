use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use crate::consts::FALLBACK_MEDIA_TYPE;
use crate::error::{EncodeError, Result, RoomifyError};

use super::target::{FileSource, UploadTarget};

const DATA_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A file's bytes inlined as `data:<media type>;base64,<payload>`.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage(String);

impl EncodedImage {
    /// Build a data URI from raw bytes.
    pub fn from_bytes(media_type: &str, bytes: &[u8]) -> Self {
        let media_type = if media_type.is_empty() {
            FALLBACK_MEDIA_TYPE
        } else {
            media_type
        };
        Self(format!(
            "{DATA_PREFIX}{media_type}{BASE64_MARKER}{}",
            STANDARD.encode(bytes)
        ))
    }

    /// Accept a string read back from storage, checking only its shape.
    pub fn from_data_uri(uri: String) -> Result<Self> {
        if !uri.starts_with(DATA_PREFIX) {
            return Err(RoomifyError::InvalidDataUri("missing `data:` prefix".into()));
        }
        if !uri.contains(BASE64_MARKER) {
            return Err(RoomifyError::InvalidDataUri("missing `;base64,` marker".into()));
        }
        Ok(Self(uri))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The media type between `data:` and `;base64,`.
    pub fn media_type(&self) -> &str {
        let rest = &self.0[DATA_PREFIX.len()..];
        rest.split_once(BASE64_MARKER).map(|(m, _)| m).unwrap_or("")
    }

    /// Decode the base64 payload back to the original bytes.
    pub fn decode_bytes(&self) -> Result<Vec<u8>> {
        let payload = self
            .0
            .split_once(BASE64_MARKER)
            .map(|(_, p)| p)
            .ok_or_else(|| RoomifyError::InvalidDataUri("missing payload".into()))?;
        STANDARD
            .decode(payload)
            .map_err(|e| RoomifyError::InvalidDataUri(e.to_string()))
    }
}

// Payloads run to megabytes; keep debug output readable.
impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("media_type", &self.media_type())
            .field("len", &self.0.len())
            .finish()
    }
}

/// Read the target's bytes and wrap them into a data URI.
///
/// Dropping the returned future abandons the read; nothing is reported.
pub async fn encode(target: &UploadTarget) -> std::result::Result<EncodedImage, EncodeError> {
    let bytes: Arc<[u8]> = match &target.source {
        FileSource::Path(path) => tokio::fs::read(path)
            .await
            .map_err(|source| EncodeError {
                name: target.name.clone(),
                source,
            })?
            .into(),
        FileSource::Bytes(bytes) => Arc::clone(bytes),
    };

    let encoded = EncodedImage::from_bytes(&target.declared_type, &bytes);
    debug!(name = %target.name, bytes = bytes.len(), "file encoded");
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_prefix() {
        let img = EncodedImage::from_bytes("image/png", b"abc");
        assert_eq!(img.as_str(), "data:image/png;base64,YWJj");
        assert_eq!(img.media_type(), "image/png");
    }

    #[test]
    fn test_empty_media_type_falls_back() {
        let img = EncodedImage::from_bytes("", b"x");
        assert!(img.as_str().starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_from_data_uri_rejects_plain_text() {
        assert!(EncodedImage::from_data_uri("hello".into()).is_err());
        assert!(EncodedImage::from_data_uri("data:image/png,raw".into()).is_err());
    }

    #[test]
    fn test_decode_bytes() {
        let img = EncodedImage::from_bytes("image/jpeg", &[0xFF, 0xD8, 0xFF]);
        assert_eq!(img.decode_bytes().unwrap(), vec![0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn test_debug_omits_payload() {
        let img = EncodedImage::from_bytes("image/png", &[0u8; 64]);
        let s = format!("{img:?}");
        assert!(!s.contains("AAAA"), "got: {s}");
    }
}
