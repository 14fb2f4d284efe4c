use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::application::DownloadCoordinator;
use crate::cli::output::OutputHandler;
use crate::domain::{AppError, DownloadOutcome, DownloadRequest};
use crate::ytdlp::{OutputLine, RunSummary};

pub struct App {
    coordinator: DownloadCoordinator,
    output: OutputHandler,
}

impl App {
    pub fn new(coordinator: DownloadCoordinator, verbose: bool) -> Self {
        let output = OutputHandler::new(verbose);
        Self {
            coordinator,
            output,
        }
    }

    /// Run until the download ends or Ctrl-C is pressed.
    pub async fn run(&self, request: DownloadRequest) -> Result<DownloadOutcome, AppError> {
        let cancel = CancellationToken::new();
        let watcher = tokio::spawn({
            let cancel = cancel.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    debug!("interrupt received");
                    cancel.cancel();
                }
            }
        });

        let result = self.run_with_cancel(request, cancel).await;
        watcher.abort();
        result
    }

    pub async fn run_with_cancel(
        &self,
        request: DownloadRequest,
        cancel: CancellationToken,
    ) -> Result<DownloadOutcome, AppError> {
        self.output.print_download_start(&request);

        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut summary = RunSummary::default();

        let run = self.coordinator.run(&request, tx, cancel.clone());
        tokio::pin!(run);

        let result = loop {
            tokio::select! {
                biased;
                result = &mut run => break result,
                Some(line) = rx.recv() => {
                    if !cancel.is_cancelled() {
                        self.handle_line(&line, &mut summary);
                    }
                }
            }
        };

        if !cancel.is_cancelled() {
            while let Ok(line) = rx.try_recv() {
                self.handle_line(&line, &mut summary);
            }
        }

        // The terminal delivers Ctrl-C to the child too, which may exit on its own first
        let result = match result {
            Ok(DownloadOutcome::Failure(_)) if cancel.is_cancelled() => {
                Ok(DownloadOutcome::Cancelled)
            }
            other => other,
        };

        match &result {
            Ok(outcome) => self.output.print_outcome(*outcome, &summary),
            Err(error) => self.output.print_error(error),
        }
        result
    }

    pub fn print_error(&self, error: &AppError) {
        self.output.print_error(error);
    }

    fn handle_line(&self, line: &str, summary: &mut RunSummary) {
        summary.record(&OutputLine::parse(line));
        self.output.print_line(line);
    }
}

/// Process exit status for a finished run. Cancelling is not an error.
pub fn exit_code(result: &Result<DownloadOutcome, AppError>) -> u8 {
    match result {
        Ok(DownloadOutcome::Success) | Ok(DownloadOutcome::Cancelled) => 0,
        Ok(DownloadOutcome::Failure(_)) | Err(_) => 1,
    }
}
