use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Missing {0}")]
    MissingInput(&'static str),

    #[error("{0} was not found; install yt-dlp or set AUDIO_DOWNLOADER_YTDLP")]
    UtilityNotFound(String),

    #[error("Cannot create output folder {}: {message}", path.display())]
    Directory { path: PathBuf, message: String },

    #[error("Failed to start {0}")]
    Spawn(String),

    #[error("I/O error: {0}")]
    Io(String),
}
