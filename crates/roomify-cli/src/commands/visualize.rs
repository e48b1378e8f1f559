use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use roomify_core::config::UploadConfig;
use roomify_core::handoff::{HandoffKey, ViewId};
use roomify_core::visualizer::{VisualizerContent, VisualizerView};

use crate::summary::print_visualizer;

#[derive(Args)]
pub struct VisualizeArgs {
    /// View id printed by `roomify upload`
    pub view_id: String,

    /// Directory holding hand-off entries
    #[arg(long)]
    pub store_dir: Option<PathBuf>,

    /// Upload config file (TOML); only the hand-off namespace is used
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Save the floor plan to this path (format from the extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &VisualizeArgs) -> Result<()> {
    let config: UploadConfig = super::load_config(args.config.as_deref())?;
    let view_id = ViewId::parse(&args.view_id)?;
    let key = HandoffKey::new(&config.handoff_namespace, &view_id);

    let mut store = super::open_store(args.store_dir.as_ref());
    let view = VisualizerView::enter_with_key(&mut store, view_id, key)?;

    let preview = view.preview().context("Failed to decode floor plan")?;
    print_visualizer(&view, preview.as_ref());

    if let (VisualizerContent::Ready(_), Some(image), Some(path)) =
        (view.content(), preview.as_ref(), args.output.as_ref())
    {
        image
            .save(path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        println!("Saved to {}", path.display());
    }

    view.leave(&mut store)?;
    Ok(())
}
