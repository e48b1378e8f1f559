use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::ImageFormat;

use crate::error::Result;

/// Where the bytes of a submitted file live.
#[derive(Clone, Debug)]
pub enum FileSource {
    /// A file on disk, read lazily by the encoder.
    Path(PathBuf),
    /// Bytes already in memory (e.g. a drop that carried no path).
    Bytes(Arc<[u8]>),
}

/// A file the user picked or dropped, as seen by the validator and encoder.
#[derive(Clone, Debug)]
pub struct UploadTarget {
    pub source: FileSource,
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type reported by the picker or drop source; empty when unknown.
    pub declared_type: String,
}

impl UploadTarget {
    /// Describe a file on disk. Size comes from its metadata, the declared type
    /// from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let meta = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            source: FileSource::Path(path.to_path_buf()),
            name,
            size: meta.len(),
            declared_type: mime_for_path(path),
        })
    }

    /// Describe an in-memory file. An empty or missing `declared_type` is
    /// inferred from the name's extension.
    pub fn from_bytes(
        name: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
        declared_type: Option<String>,
    ) -> Self {
        let name = name.into();
        let bytes = bytes.into();
        let declared_type = declared_type
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| mime_for_path(Path::new(&name)));

        Self {
            size: bytes.len() as u64,
            source: FileSource::Bytes(bytes),
            name,
            declared_type,
        }
    }
}

/// MIME type implied by a path's extension, or an empty string.
pub fn mime_for_path(path: &Path) -> String {
    ImageFormat::from_path(path)
        .map(|f| f.to_mime_type().to_string())
        .unwrap_or_default()
}
