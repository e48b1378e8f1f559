//! Single-use storage that carries an encoded image from the upload view to
//! the visualizer view.

mod file;
mod memory;

use std::fmt;
use std::str::FromStr;

use crate::consts::HANDOFF_NAMESPACE;
use crate::error::{Result, RoomifyError};
use crate::upload::EncodedImage;

pub use file::FileHandoffStore;
pub use memory::MemoryHandoffStore;

/// Identifier of a visualizer page. ASCII letters, digits, `-` and `_` only,
/// so it is safe to embed in keys and file names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ViewId(String);

impl ViewId {
    /// A fresh random id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn parse(s: &str) -> Result<Self> {
        let valid = !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(RoomifyError::InvalidViewId(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ViewId {
    type Err = RoomifyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `<namespace>_<view id>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HandoffKey(String);

impl HandoffKey {
    pub fn new(namespace: &str, view: &ViewId) -> Self {
        Self(format!("{namespace}_{view}"))
    }

    /// Key under the default `roomify_image` namespace.
    pub fn for_view(view: &ViewId) -> Self {
        Self::new(HANDOFF_NAMESPACE, view)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HandoffKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keyed slot holding at most one image per key.
///
/// `take` is destructive: once an entry has been taken it is gone, and a
/// missing entry is a normal "not ready yet / already consumed" answer.
pub trait HandoffStore {
    /// Store `image`, replacing any entry already under `key`.
    fn put(&mut self, key: &HandoffKey, image: EncodedImage) -> Result<()>;

    /// Look without consuming.
    fn get(&self, key: &HandoffKey) -> Result<Option<EncodedImage>>;

    /// Remove and return the entry.
    fn take(&mut self, key: &HandoffKey) -> Result<Option<EncodedImage>>;
}
