use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

static ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[download\] Downloading (?:item|video) (\d+) of (\d+)").expect("valid regex")
});

static PROGRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[download\]\s+(\d+(?:\.\d+)?)%").expect("valid regex"));

static CONVERTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[ExtractAudio\] Destination: (.+)$").expect("valid regex"));

const ARCHIVED_MARKER: &str = "has already been recorded in the archive";

/// What a single line of utility output means to a front end.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputLine {
    ItemStarted { index: u32, total: u32 },
    /// Percentage of the current item, 0.0 to 100.0
    Progress(f32),
    AlreadyArchived,
    Converted(PathBuf),
    Error(String),
    Other,
}

impl OutputLine {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end();

        if let Some(caps) = ITEM_RE.captures(line) {
            if let (Ok(index), Ok(total)) = (caps[1].parse(), caps[2].parse()) {
                return OutputLine::ItemStarted { index, total };
            }
        }

        if let Some(caps) = PROGRESS_RE.captures(line) {
            if let Ok(percent) = caps[1].parse::<f32>() {
                return OutputLine::Progress(percent.clamp(0.0, 100.0));
            }
        }

        if line.contains(ARCHIVED_MARKER) {
            return OutputLine::AlreadyArchived;
        }

        if let Some(caps) = CONVERTED_RE.captures(line) {
            return OutputLine::Converted(PathBuf::from(&caps[1]));
        }

        if let Some(message) = line.strip_prefix("ERROR:") {
            return OutputLine::Error(message.trim().to_string());
        }

        OutputLine::Other
    }
}

/// Running tally of what happened during a playlist run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl RunSummary {
    pub fn record(&mut self, line: &OutputLine) {
        match line {
            OutputLine::Converted(_) => self.converted += 1,
            OutputLine::AlreadyArchived => self.skipped += 1,
            OutputLine::Error(_) => self.errors += 1,
            _ => {}
        }
    }
}
