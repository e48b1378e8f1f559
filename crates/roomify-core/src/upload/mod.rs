pub mod controller;
pub mod encode;
pub mod progress;
pub mod target;
pub mod validate;

pub use controller::{Submission, UploadController, UploadListener, UploadPhase, UploadStatus};
pub use encode::{encode, EncodedImage};
pub use progress::{ProgressHandle, ProgressSimulator, ProgressState, ProgressTick};
pub use target::{FileSource, UploadTarget};
pub use validate::{validate, validate_with_limit, ValidationResult};
