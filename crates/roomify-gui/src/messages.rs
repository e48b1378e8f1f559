use std::path::PathBuf;

use roomify_core::upload::{EncodedImage, UploadStatus, UploadTarget};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Describe a file on disk and submit it.
    SubmitPath(PathBuf),

    /// Submit a file dropped without a path (its bytes came with the drop).
    Submit(UploadTarget),

    /// Forward the navbar's sign-in toggle.
    SetSignedIn(bool),

    /// The upload page is going away; stop any in-flight upload.
    Teardown,
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// A new file reached the worker, from a drop or from the picker.
    Submitting,

    /// Latest controller snapshot.
    Status(UploadStatus),

    /// Encoded image ready to hand off to the visualizer.
    Completed(EncodedImage),

    /// Could not even describe the file (e.g. it vanished before submit).
    Error { message: String },
}
