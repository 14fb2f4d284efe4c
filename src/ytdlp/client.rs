use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use futures::stream::{self, BoxStream};
use futures::StreamExt;
use tokio::io::AsyncRead;
use tokio::process::Command;
use tokio::sync::mpsc;
use tokio_util::codec::{AnyDelimiterCodec, FramedRead};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::command::build_args;
use super::models::YtDlpConfig;
use crate::domain::{AppError, DownloadOutcome};

#[derive(Debug, Clone, Default)]
pub struct YtDlp {
    config: YtDlpConfig,
}

impl YtDlp {
    pub fn new(config: YtDlpConfig) -> Self {
        Self { config }
    }

    /// Resolve the program on `PATH` (or as a direct path).
    pub fn check_available(&self) -> Result<(), AppError> {
        which::which(&self.config.program)
            .map(|_| ())
            .map_err(|_| AppError::UtilityNotFound(self.program_name()))
    }

    /// Run one playlist download into `destination`, which must already exist.
    ///
    /// Every non-empty line the child writes to stdout or stderr is sent on
    /// `lines` as soon as it is read. Firing `cancel` kills the child and
    /// stops forwarding output.
    pub async fn download_playlist(
        &self,
        source: &str,
        destination: &Path,
        lines: mpsc::UnboundedSender<String>,
        cancel: CancellationToken,
    ) -> Result<DownloadOutcome, AppError> {
        if cancel.is_cancelled() {
            return Ok(DownloadOutcome::Cancelled);
        }

        let args = build_args(source, destination);
        debug!(program = %self.config.program.display(), ?args, "launching yt-dlp");

        let mut child = Command::new(&self.config.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| AppError::Io("child stdout was not captured".to_string()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| AppError::Io("child stderr was not captured".to_string()))?;

        let forwarder = tokio::spawn(forward_output(
            output_lines(stdout),
            output_lines(stderr),
            lines,
        ));

        let status = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                forwarder.abort();
                if let Err(e) = child.kill().await {
                    warn!(error = %e, "failed to kill yt-dlp");
                }
                info!("download cancelled");
                return Ok(DownloadOutcome::Cancelled);
            }
            status = child.wait() => status.map_err(|e| AppError::Io(e.to_string()))?,
        };

        // Drain whatever the child wrote before exiting
        if let Err(e) = forwarder.await {
            warn!(error = %e, "output forwarder stopped early");
        }

        let code = exit_code(status);
        info!(code, "yt-dlp exited");

        if status.success() {
            Ok(DownloadOutcome::Success)
        } else {
            Ok(DownloadOutcome::Failure(code))
        }
    }

    fn program_name(&self) -> String {
        self.config.program.display().to_string()
    }

    fn spawn_error(&self, e: io::Error) -> AppError {
        if e.kind() == io::ErrorKind::NotFound {
            AppError::UtilityNotFound(self.program_name())
        } else {
            AppError::Spawn(format!("{}: {}", self.program_name(), e))
        }
    }
}

/// Split a child pipe into lines. Progress redraws use `\r`, so both
/// carriage returns and newlines end a line.
fn output_lines<R>(reader: R) -> BoxStream<'static, String>
where
    R: AsyncRead + Send + 'static,
{
    FramedRead::new(reader, AnyDelimiterCodec::new(b"\r\n".to_vec(), Vec::new()))
        .filter_map(|frame| async move {
            let frame = frame.ok()?;
            let line = String::from_utf8_lossy(&frame).trim_end().to_string();
            (!line.is_empty()).then_some(line)
        })
        .boxed()
}

async fn forward_output(
    stdout: BoxStream<'static, String>,
    stderr: BoxStream<'static, String>,
    lines: mpsc::UnboundedSender<String>,
) {
    let mut merged = stream::select(stdout, stderr);
    while let Some(line) = merged.next().await {
        // Keep draining even if nobody listens, otherwise the child blocks on a full pipe
        let _ = lines.send(line);
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    -1
}
