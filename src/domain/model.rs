use std::path::PathBuf;

use super::AppError;
use crate::utils::expand_tilde;

/// Fully resolved input for one orchestrator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub source: String,
    pub destination: PathBuf,
}

impl DownloadRequest {
    /// Trims both inputs, rejects empty ones and expands a leading `~` in the
    /// destination.
    pub fn new(source: &str, destination: &str) -> Result<Self, AppError> {
        let source = source.trim();
        if source.is_empty() {
            return Err(AppError::MissingInput("playlist URL"));
        }

        let destination = destination.trim();
        if destination.is_empty() {
            return Err(AppError::MissingInput("output folder"));
        }

        Ok(Self {
            source: source.to_string(),
            destination: expand_tilde(destination),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Success,
    /// Non-zero exit status of the child process
    Failure(i32),
    Cancelled,
}

impl DownloadOutcome {
    pub fn phase(&self) -> DownloadPhase {
        match self {
            DownloadOutcome::Success => DownloadPhase::Succeeded,
            DownloadOutcome::Failure(_) => DownloadPhase::Failed,
            DownloadOutcome::Cancelled => DownloadPhase::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadPhase {
    Idle,
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl DownloadPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DownloadPhase::Succeeded | DownloadPhase::Failed | DownloadPhase::Cancelled
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_blank_inputs() {
        assert_eq!(
            DownloadRequest::new("   ", "/tmp/out"),
            Err(AppError::MissingInput("playlist URL"))
        );
        assert_eq!(
            DownloadRequest::new("https://example.com/playlist?list=ABC", ""),
            Err(AppError::MissingInput("output folder"))
        );
    }

    #[test]
    fn test_request_trims_and_keeps_absolute_destination() {
        let request =
            DownloadRequest::new(" https://example.com/playlist?list=ABC ", " /tmp/out ").unwrap();
        assert_eq!(request.source, "https://example.com/playlist?list=ABC");
        assert_eq!(request.destination, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_request_expands_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let request = DownloadRequest::new("https://example.com/x", "~/Music").unwrap();
        assert_eq!(request.destination, home.join("Music"));
    }

    #[test]
    fn test_outcome_phases_are_terminal() {
        for outcome in [
            DownloadOutcome::Success,
            DownloadOutcome::Failure(2),
            DownloadOutcome::Cancelled,
        ] {
            assert!(outcome.phase().is_terminal());
        }
        assert!(!DownloadPhase::Idle.is_terminal());
        assert!(!DownloadPhase::Running.is_terminal());
    }
}
