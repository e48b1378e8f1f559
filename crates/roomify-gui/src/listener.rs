use std::sync::mpsc;

use roomify_core::error::UploadError;
use roomify_core::upload::{EncodedImage, UploadListener};

use crate::messages::WorkerResult;

/// Upload listener that sends outcomes over an mpsc channel to the UI thread.
///
/// Progress is not forwarded here; the worker relays full status snapshots.
pub struct ChannelUploadListener {
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
}

impl ChannelUploadListener {
    pub fn new(tx: mpsc::Sender<WorkerResult>, ctx: egui::Context) -> Self {
        Self { tx, ctx }
    }
}

impl UploadListener for ChannelUploadListener {
    fn on_complete(&self, image: EncodedImage) {
        let _ = self.tx.send(WorkerResult::Completed(image));
        self.ctx.request_repaint();
    }

    fn on_error(&self, error: &UploadError) {
        // The status snapshot carries the reason; just make sure it gets drawn.
        tracing::debug!("upload error surfaced to UI: {}", error.reason());
        self.ctx.request_repaint();
    }
}
