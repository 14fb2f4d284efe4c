use std::path::{Path, PathBuf};

use futures::{stream::BoxStream, StreamExt};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::{
    domain::{AppError, DownloadOutcome, DownloadRequest},
    ytdlp::YtDlp,
};

#[derive(Debug, Clone)]
pub enum DownloadEvent {
    /// One line of utility output
    Line(String),
    /// Always the last event of a run
    Finished(Result<DownloadOutcome, AppError>),
}

#[derive(Debug, Clone, Default)]
pub struct DownloadCoordinator {
    ytdlp: YtDlp,
}

impl DownloadCoordinator {
    pub fn new(ytdlp: YtDlp) -> Self {
        Self { ytdlp }
    }

    /// Create the destination and any missing parents.
    pub async fn prepare_destination(&self, destination: &Path) -> Result<PathBuf, AppError> {
        tokio::fs::create_dir_all(destination)
            .await
            .map_err(|e| AppError::Directory {
                path: destination.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(destination.to_path_buf())
    }

    pub async fn run(
        &self,
        request: &DownloadRequest,
        lines: mpsc::UnboundedSender<String>,
        cancel: CancellationToken,
    ) -> Result<DownloadOutcome, AppError> {
        let destination = self.prepare_destination(&request.destination).await?;
        self.ytdlp.check_available()?;

        info!(
            source = %request.source,
            destination = %destination.display(),
            "starting playlist download"
        );

        self.ytdlp
            .download_playlist(&request.source, &destination, lines, cancel)
            .await
    }

    /// Run in a background task and expose the run as a stream of events:
    /// every output line as it arrives, then exactly one `Finished`.
    pub fn download_stream(
        &self,
        request: DownloadRequest,
        cancel: CancellationToken,
    ) -> BoxStream<'static, DownloadEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        let coordinator = self.clone();

        let handle = tokio::spawn(async move { coordinator.run(&request, tx, cancel).await });

        let lines = futures::stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|line| (DownloadEvent::Line(line), rx))
        });

        let finished = futures::stream::once(async move {
            let result = handle
                .await
                .unwrap_or_else(|e| Err(AppError::Io(format!("download task failed: {}", e))));
            DownloadEvent::Finished(result)
        });

        lines.chain(finished).boxed()
    }
}
