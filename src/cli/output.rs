use crate::domain::{AppError, DownloadOutcome, DownloadRequest};
use crate::ytdlp::RunSummary;

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_download_start(&self, request: &DownloadRequest) {
        println!(
            "Downloading {} into {}",
            request.source,
            request.destination.display()
        );
    }

    pub fn print_line(&self, line: &str) {
        println!("{}", line);
    }

    pub fn print_outcome(&self, outcome: DownloadOutcome, summary: &RunSummary) {
        match outcome {
            DownloadOutcome::Success => {
                println!(
                    "\nDone: {} new, {} already in the archive.",
                    summary.converted, summary.skipped
                );
                if summary.errors > 0 {
                    println!("{} item(s) could not be downloaded.", summary.errors);
                }
            }
            DownloadOutcome::Failure(code) => {
                eprintln!(
                    "\nAn error occurred during download: yt-dlp exited with code {}",
                    code
                );
            }
            DownloadOutcome::Cancelled => {
                println!("\nProcess interrupted by user. Exiting gracefully.");
            }
        }
    }

    pub fn print_error(&self, error: &AppError) {
        eprintln!("Error: {}", error);

        if self.verbose {
            eprintln!("\nError details: {:?}", error);
        }
    }
}
