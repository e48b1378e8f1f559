use image::DynamicImage;
use tracing::debug;

use crate::consts::VISUALIZER_LOADING;
use crate::error::Result;
use crate::handoff::{HandoffKey, HandoffStore, ViewId};
use crate::upload::EncodedImage;

/// What the visualizer page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizerContent<'a> {
    Ready(&'a EncodedImage),
    /// Nothing handed off (yet, or any more).
    Loading,
}

/// Receiving side of the hand-off. Consumes the entry on enter and clears
/// the key again on leave.
#[derive(Debug)]
pub struct VisualizerView {
    view_id: ViewId,
    key: HandoffKey,
    image: Option<EncodedImage>,
}

impl VisualizerView {
    /// Enter the page for `view_id`, using the default key namespace.
    pub fn enter<S: HandoffStore + ?Sized>(store: &mut S, view_id: ViewId) -> Result<Self> {
        let key = HandoffKey::for_view(&view_id);
        Self::enter_with_key(store, view_id, key)
    }

    pub fn enter_with_key<S: HandoffStore + ?Sized>(
        store: &mut S,
        view_id: ViewId,
        key: HandoffKey,
    ) -> Result<Self> {
        let image = store.take(&key)?;
        debug!(%key, found = image.is_some(), "visualizer entered");
        Ok(Self {
            view_id,
            key,
            image,
        })
    }

    pub fn view_id(&self) -> &ViewId {
        &self.view_id
    }

    pub fn heading(&self) -> String {
        format!("Visualizer - {}", self.view_id)
    }

    pub fn content(&self) -> VisualizerContent<'_> {
        match &self.image {
            Some(image) => VisualizerContent::Ready(image),
            None => VisualizerContent::Loading,
        }
    }

    pub fn loading_text(&self) -> &'static str {
        VISUALIZER_LOADING
    }

    /// Decode the handed-off image, if any.
    pub fn preview(&self) -> Result<Option<DynamicImage>> {
        match &self.image {
            Some(image) => Ok(Some(decode_preview(image)?)),
            None => Ok(None),
        }
    }

    /// Leave the page. The key is taken once more so a late or repeated write
    /// does not linger for the next visit.
    pub fn leave<S: HandoffStore + ?Sized>(self, store: &mut S) -> Result<()> {
        if store.take(&self.key)?.is_some() {
            debug!(key = %self.key, "discarded stale hand-off entry");
        }
        Ok(())
    }
}

/// Decode a data URI's payload with the `image` crate.
pub fn decode_preview(image: &EncodedImage) -> Result<DynamicImage> {
    let bytes = image.decode_bytes()?;
    Ok(image::load_from_memory(&bytes)?)
}
