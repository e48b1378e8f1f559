use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use roomify_core::config::UploadConfig;
use roomify_core::consts::{PROMPT_SIGNED_OUT, STATUS_ANALYZING, STATUS_REDIRECTING};
use roomify_core::error::UploadError;
use roomify_core::handoff::{HandoffKey, HandoffStore, ViewId};
use roomify_core::upload::{EncodedImage, Submission, UploadController, UploadListener, UploadTarget};
use tokio::sync::mpsc;
use tracing::debug;

use crate::summary::print_upload_summary;

#[derive(Args)]
pub struct UploadArgs {
    /// Floor plan image (.jpg, .jpeg or .png, at most 10 MB)
    pub file: PathBuf,

    /// View id to hand the image off to (generated when omitted)
    #[arg(long)]
    pub view_id: Option<String>,

    /// Directory holding hand-off entries
    #[arg(long)]
    pub store_dir: Option<PathBuf>,

    /// Upload config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run without signing in; the upload is refused
    #[arg(long)]
    pub guest: bool,
}

enum Outcome {
    Complete(EncodedImage),
    Failed(String),
}

/// Mirrors controller callbacks onto a terminal progress bar.
struct BarListener {
    bar: ProgressBar,
    outcome: mpsc::UnboundedSender<Outcome>,
}

impl UploadListener for BarListener {
    fn on_progress(&self, percent: u8) {
        self.bar.set_position(u64::from(percent));
        if percent >= 100 {
            self.bar.set_message(STATUS_REDIRECTING);
        }
    }

    fn on_complete(&self, image: EncodedImage) {
        self.bar.finish();
        let _ = self.outcome.send(Outcome::Complete(image));
    }

    fn on_error(&self, error: &UploadError) {
        self.bar.abandon();
        let _ = self.outcome.send(Outcome::Failed(error.reason()));
    }
}

pub fn run(args: &UploadArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let target = UploadTarget::from_path(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let view_id = match args.view_id {
        Some(ref id) => ViewId::parse(id)?,
        None => ViewId::generate(),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start runtime")?;
    let image = runtime.block_on(upload(config.clone(), !args.guest, target))?;

    let key = HandoffKey::new(&config.handoff_namespace, &view_id);
    debug!(%key, "handing off encoded image");
    let mut store = super::open_store(args.store_dir.as_ref());
    store.put(&key, image.clone())?;

    print_upload_summary(&args.file, &image, &view_id, store.root());
    Ok(())
}

async fn upload(
    config: UploadConfig,
    signed_in: bool,
    target: UploadTarget,
) -> Result<EncodedImage> {
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}%")?
            .progress_chars("=> "),
    );
    bar.set_message(STATUS_ANALYZING);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let listener = Arc::new(BarListener {
        bar: bar.clone(),
        outcome: tx,
    });
    let mut controller = UploadController::new(config, listener);
    controller.set_signed_in(signed_in);

    match controller.submit(target) {
        Submission::Started => {}
        Submission::Ignored => {
            bar.finish_and_clear();
            bail!(PROMPT_SIGNED_OUT);
        }
        Submission::Rejected(reason) => bail!(reason),
    }

    match rx.recv().await {
        Some(Outcome::Complete(image)) => Ok(image),
        Some(Outcome::Failed(reason)) => bail!(reason),
        None => bail!("Upload ended without a result"),
    }
}
