/// Largest accepted upload, in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted by declared type alone.
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// File name suffixes accepted regardless of declared type (compared lowercase).
pub const ALLOWED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png"];

/// Percent added to the simulated progress on every tick.
pub const PROGRESS_STEP: u8 = 10;

/// Milliseconds between simulated progress ticks.
pub const PROGRESS_INTERVAL_MS: u64 = 100;

/// Delay between reaching 100% and handing the image to the caller.
pub const REDIRECT_DELAY_MS: u64 = 600;

/// Key prefix for hand-off entries; keys look like `roomify_image_<view id>`.
pub const HANDOFF_NAMESPACE: &str = "roomify_image";

/// Media type used when the file carries no declared type.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Directory name (under the system temp dir) for file-backed hand-off entries.
pub const HANDOFF_DIR_NAME: &str = "roomify-handoff";

pub const PROMPT_SIGNED_IN: &str =
    "Drag and drop your floor plan here, or click to select a file.";

pub const PROMPT_SIGNED_OUT: &str = "Please sign in to upload your floor plan.";

pub const SIZE_HINT: &str = "Maximum file size is 10 MB.";

pub const STATUS_ANALYZING: &str = "Analyzing Floor Plan...";

pub const STATUS_REDIRECTING: &str = "Redirecting...";

pub const VISUALIZER_LOADING: &str = "Loading floor plan...";
