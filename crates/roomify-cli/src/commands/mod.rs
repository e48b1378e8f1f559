pub mod config;
pub mod upload;
pub mod visualize;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use roomify_core::config::UploadConfig;
use roomify_core::handoff::FileHandoffStore;

/// Read an upload config from TOML, falling back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<UploadConfig> {
    let config: UploadConfig = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&contents).context("Invalid upload config")?
        }
        None => UploadConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

pub fn open_store(dir: Option<&PathBuf>) -> FileHandoffStore {
    match dir {
        Some(dir) => FileHandoffStore::new(dir),
        None => FileHandoffStore::default(),
    }
}
