use std::sync::mpsc;
use std::sync::Arc;

use roomify_core::config::UploadConfig;
use roomify_core::upload::{Submission, UploadController, UploadTarget};
use tokio::sync::mpsc as async_mpsc;
use tracing::{debug, info, warn};

use crate::listener::ChannelUploadListener;
use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
///
/// The thread runs a current-thread tokio runtime that owns the upload
/// controller, so timers and the file read never touch the UI thread.
pub fn spawn_worker(
    config: UploadConfig,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> anyhow::Result<async_mpsc::UnboundedSender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = async_mpsc::unbounded_channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("roomify-worker".into())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    send_error(&result_tx, &ctx, format!("Failed to start runtime: {e}"));
                    return;
                }
            };
            runtime.block_on(worker_loop(config, cmd_rx, result_tx, ctx));
        })?;

    Ok(cmd_tx)
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

async fn worker_loop(
    config: UploadConfig,
    mut cmd_rx: async_mpsc::UnboundedReceiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let listener = Arc::new(ChannelUploadListener::new(tx.clone(), ctx.clone()));
    let mut controller = UploadController::new(config, listener);
    let mut status_rx = controller.subscribe();

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => match cmd {
                Some(WorkerCommand::SubmitPath(path)) => {
                    send(&tx, &ctx, WorkerResult::Submitting);
                    match UploadTarget::from_path(&path) {
                        Ok(target) => submit(&mut controller, target),
                        Err(e) => send_error(&tx, &ctx, format!("{}: {e}", path.display())),
                    }
                }
                Some(WorkerCommand::Submit(target)) => {
                    send(&tx, &ctx, WorkerResult::Submitting);
                    submit(&mut controller, target);
                }
                Some(WorkerCommand::SetSignedIn(signed_in)) => {
                    info!("signed in: {signed_in}");
                    controller.set_signed_in(signed_in);
                }
                Some(WorkerCommand::Teardown) => controller.teardown(),
                None => break,
            },
            changed = status_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let status = status_rx.borrow_and_update().clone();
                send(&tx, &ctx, WorkerResult::Status(status));
            }
        }
    }

    controller.teardown();
}

fn submit(controller: &mut UploadController, target: UploadTarget) {
    let name = target.name.clone();
    match controller.submit(target) {
        Submission::Started => info!("uploading {name}"),
        Submission::Rejected(reason) => debug!("{name} rejected: {reason}"),
        Submission::Ignored => warn!("{name} ignored: not signed in"),
    }
}
