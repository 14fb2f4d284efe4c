use clap::Parser;
use std::path::PathBuf;

/// Download YouTube audio efficiently with embedded metadata and cover art.
///
/// Missing arguments are asked for interactively.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// YouTube playlist URL to download audio from
    pub playlist_url: Option<String>,

    /// Output folder for audio files (default: ~/Music)
    #[arg(short, long)]
    pub output_folder: Option<String>,

    /// Path to the yt-dlp executable
    #[arg(long = "yt-dlp", value_name = "PATH")]
    pub ytdlp: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
