use std::sync::mpsc;

use roomify_core::config::UploadConfig;
use roomify_core::handoff::{HandoffKey, HandoffStore, MemoryHandoffStore, ViewId};
use roomify_core::upload::{EncodedImage, UploadTarget};
use roomify_core::visualizer::VisualizerView;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::convert::dynamic_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{Page, UploadUiState, VisualizerState};
use crate::worker;

pub struct RoomifyApp {
    pub cmd_tx: UnboundedSender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: UploadConfig,
    pub store: MemoryHandoffStore,
    pub signed_in: bool,
    pub upload: UploadUiState,
    pub page: Page,
}

impl RoomifyApp {
    pub fn new(ctx: &egui::Context) -> anyhow::Result<Self> {
        let config = UploadConfig::default();
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(config.clone(), result_tx, ctx.clone())?;

        Ok(Self {
            cmd_tx,
            result_rx,
            config,
            store: MemoryHandoffStore::new(),
            signed_in: false,
            upload: UploadUiState::default(),
            page: Page::Upload,
        })
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Submitting => self.upload.begin_attempt(),
                WorkerResult::Status(status) => {
                    if matches!(self.page, Page::Upload) {
                        self.upload.status = status;
                    }
                }
                WorkerResult::Completed(image) => self.hand_off(ctx, image),
                WorkerResult::Error { message } => {
                    warn!("{message}");
                    self.upload.local_error = Some(message);
                }
            }
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn set_signed_in(&mut self, signed_in: bool) {
        self.signed_in = signed_in;
        self.send_command(WorkerCommand::SetSignedIn(signed_in));
    }

    /// Forward the first dropped file. Drops carry either a path or the bytes.
    pub fn submit_dropped(&mut self, file: egui::DroppedFile) {
        let cmd = if let Some(path) = file.path {
            WorkerCommand::SubmitPath(path)
        } else if let Some(bytes) = file.bytes {
            WorkerCommand::Submit(UploadTarget::from_bytes(file.name, bytes, Some(file.mime)))
        } else {
            return;
        };
        self.send_command(cmd);
    }

    /// Park the encoded image under a fresh view id and navigate to it.
    fn hand_off(&mut self, ctx: &egui::Context, image: EncodedImage) {
        let view_id = ViewId::generate();
        let key = HandoffKey::new(&self.config.handoff_namespace, &view_id);
        if let Err(e) = self.store.put(&key, image) {
            self.upload.local_error = Some(e.to_string());
            return;
        }
        self.open_visualizer(ctx, view_id, key);
    }

    fn open_visualizer(&mut self, ctx: &egui::Context, view_id: ViewId, key: HandoffKey) {
        self.send_command(WorkerCommand::Teardown);
        self.upload = UploadUiState::default();

        let view = match VisualizerView::enter_with_key(&mut self.store, view_id, key) {
            Ok(view) => view,
            Err(e) => {
                self.upload.local_error = Some(e.to_string());
                return;
            }
        };
        info!("opened {}", view.heading());

        let mut state = VisualizerState::new(view);
        match state.view.preview() {
            Ok(Some(image)) => {
                let color_image = dynamic_to_color_image(&image);
                state.image_size = Some(color_image.size);
                state.texture =
                    Some(ctx.load_texture("floor-plan", color_image, egui::TextureOptions::LINEAR));
            }
            Ok(None) => {}
            Err(e) => state.decode_error = Some(e.to_string()),
        }
        self.page = Page::Visualizer(Box::new(state));
    }

    /// Leave the visualizer, discarding any entry left under its key.
    pub fn close_visualizer(&mut self) {
        if let Page::Visualizer(state) = std::mem::replace(&mut self.page, Page::Upload) {
            if let Err(e) = state.view.leave(&mut self.store) {
                warn!("leaving visualizer: {e}");
            }
        }
    }
}

impl eframe::App for RoomifyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::navbar::show(ctx, self);
        if matches!(self.page, Page::Upload) {
            panels::upload::show(ctx, self);
        } else {
            panels::visualizer::show(ctx, self);
        }
    }
}
