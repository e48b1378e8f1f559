use roomify_core::upload::{UploadPhase, UploadStatus};

#[derive(Default)]
pub struct UploadUiState {
    /// Last snapshot relayed by the worker.
    pub status: UploadStatus,
    /// Failure that happened before the controller saw the file.
    pub local_error: Option<String>,
    pub drag_hover: bool,
}

impl UploadUiState {
    /// A new submission supersedes whatever went wrong before it.
    pub fn begin_attempt(&mut self) {
        self.local_error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.local_error
            .as_deref()
            .or(self.status.error.as_deref())
    }

    pub fn shows_progress(&self) -> bool {
        self.status.phase.is_in_flight() || self.status.phase == UploadPhase::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_attempt_clears_stale_local_error() {
        let mut state = UploadUiState {
            local_error: Some("gone.png: No such file or directory".into()),
            ..Default::default()
        };
        assert!(state.error().is_some());

        state.begin_attempt();
        state.status = UploadStatus {
            phase: UploadPhase::Processing,
            percent: 30,
            file_name: Some("plan.png".into()),
            error: None,
        };

        assert_eq!(state.error(), None);
        assert!(state.shows_progress());
    }

    #[test]
    fn test_controller_error_shown_after_attempt() {
        let mut state = UploadUiState {
            local_error: Some("stale".into()),
            ..Default::default()
        };
        state.begin_attempt();
        state.status = UploadStatus {
            phase: UploadPhase::Error,
            percent: 0,
            file_name: Some("plan.gif".into()),
            error: Some("Only .jpg, .jpeg, and .png files are allowed.".into()),
        };

        assert_eq!(
            state.error(),
            Some("Only .jpg, .jpeg, and .png files are allowed.")
        );
        assert!(!state.shows_progress());
    }
}
