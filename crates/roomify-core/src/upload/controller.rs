use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::UploadConfig;
use crate::consts::{STATUS_ANALYZING, STATUS_REDIRECTING};
use crate::error::{EncodeError, UploadError, ValidationError};

use super::encode::{encode, EncodedImage};
use super::progress::{ProgressCanceller, ProgressHandle, ProgressSimulator, ProgressTick};
use super::target::UploadTarget;
use super::validate::validate_with_limit;

/// Where an upload is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    /// No file selected.
    #[default]
    Idle,
    Validating,
    /// Encoding and the simulated ramp are running.
    Processing,
    /// Both finished; waiting out the hand-off delay.
    Completing,
    Done,
    Error,
}

impl UploadPhase {
    /// Encoding, ramping or waiting to hand off.
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::Validating | Self::Processing | Self::Completing)
    }
}

impl fmt::Display for UploadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Validating => write!(f, "Validating"),
            Self::Processing => write!(f, "Processing"),
            Self::Completing => write!(f, "Completing"),
            Self::Done => write!(f, "Done"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// Snapshot of the controller for front-ends to render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadStatus {
    pub phase: UploadPhase,
    pub percent: u8,
    pub file_name: Option<String>,
    /// Reason of the last rejection or read failure.
    pub error: Option<String>,
}

impl UploadStatus {
    /// Caption under the progress bar.
    pub fn status_text(&self) -> &'static str {
        if self.percent < 100 {
            STATUS_ANALYZING
        } else {
            STATUS_REDIRECTING
        }
    }
}

/// Receives the outcome of an upload. All methods default to no-ops.
///
/// For a given submission `on_complete` fires at most once, `on_error` fires at
/// most once, and never both.
pub trait UploadListener: Send + Sync {
    fn on_progress(&self, _percent: u8) {}

    fn on_complete(&self, _image: EncodedImage) {}

    fn on_error(&self, _error: &UploadError) {}
}

/// What happened to a call to [`UploadController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Not signed in; nothing changed.
    Ignored,
    Rejected(ValidationError),
    /// Encoding and the progress ramp are underway.
    Started,
}

/// Orchestrates validation, encoding, the simulated ramp and the hand-off
/// callback for one file at a time.
///
/// Submitting and tearing down must happen inside a tokio runtime; the
/// intended runtime is current-thread.
pub struct UploadController {
    config: UploadConfig,
    listener: Arc<dyn UploadListener>,
    status: Arc<watch::Sender<UploadStatus>>,
    signed_in: bool,
    session: Option<Session>,
}

impl UploadController {
    pub fn new(config: UploadConfig, listener: Arc<dyn UploadListener>) -> Self {
        let (status, _) = watch::channel(UploadStatus::default());
        Self {
            config,
            listener,
            status: Arc::new(status),
            signed_in: false,
            session: None,
        }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Feed the externally owned sign-in state. While false every submission
    /// is ignored.
    pub fn set_signed_in(&mut self, signed_in: bool) {
        self.signed_in = signed_in;
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    pub fn status(&self) -> UploadStatus {
        self.status.borrow().clone()
    }

    pub fn phase(&self) -> UploadPhase {
        self.status.borrow().phase
    }

    pub fn subscribe(&self) -> watch::Receiver<UploadStatus> {
        self.status.subscribe()
    }

    /// True while a session task is still alive.
    pub fn is_busy(&self) -> bool {
        self.session.as_ref().is_some_and(|s| !s.task.is_finished())
    }

    /// Validate `target` and, if accepted, start encoding and the progress
    /// ramp. Any previous upload is dropped silently first.
    pub fn submit(&mut self, target: UploadTarget) -> Submission {
        self.submit_with(target, |target| async move { encode(&target).await })
    }

    /// `submit` with the byte read supplied by the caller.
    pub(crate) fn submit_with<F, Fut>(&mut self, target: UploadTarget, encoding: F) -> Submission
    where
        F: FnOnce(UploadTarget) -> Fut,
        Fut: Future<Output = Result<EncodedImage, EncodeError>> + Send + 'static,
    {
        if !self.signed_in {
            debug!(name = %target.name, "submission ignored, not signed in");
            return Submission::Ignored;
        }

        self.close_session();
        self.status.send_replace(UploadStatus {
            phase: UploadPhase::Validating,
            percent: 0,
            file_name: Some(target.name.clone()),
            error: None,
        });
        debug!(
            name = %target.name,
            size = target.size,
            declared_type = %target.declared_type,
            "validating upload"
        );

        if let Err(e) = validate_with_limit(&target, self.config.max_file_size) {
            warn!(name = %target.name, reason = %e, "upload rejected");
            self.status.send_modify(|s| {
                s.phase = UploadPhase::Error;
                s.percent = 0;
                s.error = Some(e.to_string());
            });
            self.listener.on_error(&UploadError::Validation(e.clone()));
            return Submission::Rejected(e);
        }

        self.status.send_modify(|s| s.phase = UploadPhase::Processing);

        let gate = Arc::new(AtomicBool::new(true));
        let link = SessionLink {
            gate: Arc::clone(&gate),
            status: Arc::clone(&self.status),
            listener: Arc::clone(&self.listener),
        };

        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let simulator = ProgressSimulator::new(self.config.progress).start(move |tick| {
            let _ = tick_tx.send(tick);
        });
        let canceller = simulator.canceller();
        let delay = self.config.completion_delay();
        debug!(
            ticks = self.config.progress.ticks_to_full(),
            interval_ms = self.config.progress.interval_ms,
            "progress ramp started"
        );

        let task = tokio::spawn(run_session(
            encoding(target),
            tick_rx,
            canceller,
            delay,
            link,
        ));
        self.session = Some(Session {
            gate,
            simulator,
            task,
        });

        Submission::Started
    }

    /// Stop any in-flight upload without reporting anything. Both timers are
    /// cancelled before this returns.
    pub fn teardown(&mut self) {
        let was_in_flight = self.phase().is_in_flight();
        if self.close_session() && was_in_flight {
            debug!("upload torn down in flight");
            self.status.send_replace(UploadStatus::default());
        }
    }

    fn close_session(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                session.close();
                true
            }
            None => false,
        }
    }
}

impl Drop for UploadController {
    fn drop(&mut self) {
        self.close_session();
    }
}

struct Session {
    gate: Arc<AtomicBool>,
    simulator: ProgressHandle,
    task: JoinHandle<()>,
}

impl Session {
    fn close(self) {
        self.gate.store(false, Ordering::Release);
        self.simulator.cancel();
        self.task.abort();
    }
}

/// The session task's only way to touch shared state. Once the gate is closed
/// (teardown, completion or failure) every call is a no-op.
struct SessionLink {
    gate: Arc<AtomicBool>,
    status: Arc<watch::Sender<UploadStatus>>,
    listener: Arc<dyn UploadListener>,
}

impl SessionLink {
    fn is_open(&self) -> bool {
        self.gate.load(Ordering::Acquire)
    }

    fn progress(&self, percent: u8) {
        if !self.is_open() {
            return;
        }
        self.status.send_modify(|s| s.percent = percent);
        self.listener.on_progress(percent);
    }

    fn set_phase(&self, phase: UploadPhase) {
        if !self.is_open() {
            return;
        }
        debug!(%phase, "upload phase");
        self.status.send_modify(|s| s.phase = phase);
    }

    fn complete(&self, image: EncodedImage) {
        if !self.gate.swap(false, Ordering::AcqRel) {
            return;
        }
        info!(media_type = %image.media_type(), "upload complete");
        self.status.send_modify(|s| s.phase = UploadPhase::Done);
        self.listener.on_complete(image);
    }

    fn fail(&self, error: UploadError) {
        if !self.gate.swap(false, Ordering::AcqRel) {
            return;
        }
        warn!(reason = %error, "upload failed");
        self.status.send_modify(|s| {
            s.phase = UploadPhase::Error;
            s.percent = 0;
            s.error = Some(error.reason());
        });
        self.listener.on_error(&error);
    }
}

/// Run encode and the ramp side by side. Completion needs both the ramp at
/// 100 and a successful encode, whichever finishes last.
async fn run_session<Fut>(
    encoding: Fut,
    mut ticks: mpsc::UnboundedReceiver<ProgressTick>,
    simulator: ProgressCanceller,
    completion_delay: Duration,
    link: SessionLink,
) where
    Fut: Future<Output = Result<EncodedImage, EncodeError>> + Send,
{
    tokio::pin!(encoding);

    let mut encoded: Option<EncodedImage> = None;
    let mut reached_full = false;

    while !(reached_full && encoded.is_some()) {
        tokio::select! {
            result = &mut encoding, if encoded.is_none() => match result {
                Ok(image) => encoded = Some(image),
                Err(e) => {
                    simulator.cancel();
                    link.fail(UploadError::Encode(e));
                    return;
                }
            },
            Some(tick) = ticks.recv(), if !reached_full => {
                reached_full = tick.reached_full;
                link.progress(tick.percent);
            }
            // The ramp vanished without reaching 100; only teardown does that.
            else => return,
        }
    }

    let Some(image) = encoded else {
        return;
    };

    link.set_phase(UploadPhase::Completing);
    tokio::time::sleep(completion_delay).await;
    link.complete(image);
}
