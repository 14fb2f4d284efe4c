use std::path::PathBuf;

/// Name of the utility looked up on `PATH` when nothing else is configured.
pub const DEFAULT_PROGRAM: &str = "yt-dlp";

/// Configuration for the utility client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YtDlpConfig {
    pub program: PathBuf,
}

impl Default for YtDlpConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
        }
    }
}
