use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoomifyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Invalid view id: {0:?}")]
    InvalidViewId(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RoomifyError>;

/// Why a candidate file was rejected before any work started.
///
/// The `Display` text is the user-facing reason shown next to the drop zone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("File size exceeds 10 MB limit.")]
    TooLarge { size: u64, limit: u64 },

    #[error("Only .jpg, .jpeg, and .png files are allowed.")]
    UnsupportedType { name: String, declared_type: String },
}

/// Reading the file's bytes failed.
#[derive(Error, Debug)]
#[error("Failed to read {name}: {source}")]
pub struct EncodeError {
    pub name: String,
    #[source]
    pub source: std::io::Error,
}

/// Everything an in-flight upload can report through `UploadListener::on_error`.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl UploadError {
    /// Plain-language message for the inline error label.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}
