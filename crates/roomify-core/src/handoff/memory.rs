use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::upload::EncodedImage;

use super::{HandoffKey, HandoffStore};

/// In-process store. Lives as long as the application does.
#[derive(Debug, Default)]
pub struct MemoryHandoffStore {
    entries: HashMap<HandoffKey, EncodedImage>,
}

impl MemoryHandoffStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HandoffStore for MemoryHandoffStore {
    fn put(&mut self, key: &HandoffKey, image: EncodedImage) -> Result<()> {
        if self.entries.insert(key.clone(), image).is_some() {
            debug!(%key, "replaced hand-off entry");
        }
        Ok(())
    }

    fn get(&self, key: &HandoffKey) -> Result<Option<EncodedImage>> {
        Ok(self.entries.get(key).cloned())
    }

    fn take(&mut self, key: &HandoffKey) -> Result<Option<EncodedImage>> {
        Ok(self.entries.remove(key))
    }
}
