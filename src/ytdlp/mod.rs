pub mod client;
pub mod command;
pub mod models;
pub mod output;

pub use client::YtDlp;
pub use command::{archive_path, build_args, ARCHIVE_FILE_NAME};
pub use models::{YtDlpConfig, DEFAULT_PROGRAM};
pub use output::{OutputLine, RunSummary};
