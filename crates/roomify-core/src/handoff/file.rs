use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::consts::HANDOFF_DIR_NAME;
use crate::error::{Result, RoomifyError};
use crate::upload::EncodedImage;

use super::{HandoffKey, HandoffStore};

/// One file per key inside a session directory, so an entry written by one
/// process can be consumed by the next.
#[derive(Debug, Clone)]
pub struct FileHandoffStore {
    root: PathBuf,
}

impl FileHandoffStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<system temp dir>/roomify-handoff`.
    pub fn default_root() -> PathBuf {
        std::env::temp_dir().join(HANDOFF_DIR_NAME)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &HandoffKey) -> Result<PathBuf> {
        let name = key.as_str();
        if name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(RoomifyError::InvalidConfig(format!(
                "hand-off key {name:?} is not a plain file name"
            )));
        }
        Ok(self.root.join(name))
    }

    fn read(path: &Path) -> Result<Option<EncodedImage>> {
        match fs::read_to_string(path) {
            Ok(contents) => EncodedImage::from_data_uri(contents).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for FileHandoffStore {
    fn default() -> Self {
        Self::new(Self::default_root())
    }
}

impl HandoffStore for FileHandoffStore {
    fn put(&mut self, key: &HandoffKey, image: EncodedImage) -> Result<()> {
        let path = self.entry_path(key)?;
        fs::create_dir_all(&self.root)?;

        // Write beside the entry, then rename, so a reader never sees half a payload.
        let tmp = self.root.join(format!("{key}.partial"));
        fs::write(&tmp, image.as_str())?;
        fs::rename(&tmp, &path)?;

        info!(%key, path = %path.display(), "hand-off entry written");
        Ok(())
    }

    fn get(&self, key: &HandoffKey) -> Result<Option<EncodedImage>> {
        Self::read(&self.entry_path(key)?)
    }

    fn take(&mut self, key: &HandoffKey) -> Result<Option<EncodedImage>> {
        let path = self.entry_path(key)?;
        let found = Self::read(&path);

        match fs::remove_file(&path) {
            Ok(()) => debug!(%key, "hand-off entry removed"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        found
    }
}
