use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    HANDOFF_NAMESPACE, MAX_UPLOAD_BYTES, PROGRESS_INTERVAL_MS, PROGRESS_STEP, REDIRECT_DELAY_MS,
};
use crate::error::{Result, RoomifyError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Largest accepted file, in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    /// Pause between the simulated 100% and the completion callback.
    #[serde(default = "default_completion_delay_ms")]
    pub completion_delay_ms: u64,
    #[serde(default = "default_namespace")]
    pub handoff_namespace: String,
    #[serde(default)]
    pub progress: ProgressConfig,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: MAX_UPLOAD_BYTES,
            completion_delay_ms: REDIRECT_DELAY_MS,
            handoff_namespace: HANDOFF_NAMESPACE.to_string(),
            progress: ProgressConfig::default(),
        }
    }
}

impl UploadConfig {
    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    /// Reject settings that would stall or overflow the simulated progress.
    pub fn validate(&self) -> Result<()> {
        self.progress.validate()?;
        if self.handoff_namespace.is_empty() {
            return Err(RoomifyError::InvalidConfig(
                "handoff_namespace must not be empty".into(),
            ));
        }
        // Keys double as file names in the file-backed store.
        let ns = &self.handoff_namespace;
        if ns.contains(['/', '\\']) || ns.starts_with('.') {
            return Err(RoomifyError::InvalidConfig(format!(
                "handoff_namespace {ns:?} must be a plain file name prefix"
            )));
        }
        Ok(())
    }
}

/// Cadence of the simulated progress ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Percent added per tick (1..=100).
    pub step: u8,
    pub interval_ms: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            step: PROGRESS_STEP,
            interval_ms: PROGRESS_INTERVAL_MS,
        }
    }
}

impl ProgressConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.step == 0 || self.step > 100 {
            return Err(RoomifyError::InvalidConfig(format!(
                "progress.step must be within 1..=100, got {}",
                self.step
            )));
        }
        if self.interval_ms == 0 {
            return Err(RoomifyError::InvalidConfig(
                "progress.interval_ms must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Number of ticks needed to climb from 0 to 100.
    pub fn ticks_to_full(&self) -> u32 {
        let step = u32::from(self.step.max(1));
        100u32.div_ceil(step)
    }
}

fn default_max_file_size() -> u64 {
    MAX_UPLOAD_BYTES
}

fn default_completion_delay_ms() -> u64 {
    REDIRECT_DELAY_MS
}

fn default_namespace() -> String {
    HANDOFF_NAMESPACE.to_string()
}
