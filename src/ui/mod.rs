pub mod status;

use iced::{
    widget::{button, column, progress_bar, row, text, text_input, Space},
    Alignment, Element, Length,
};

use crate::domain::DownloadPhase;
use crate::ytdlp::OutputLine;
pub use status::{StatusLog, STATUS_LINES};

/// Main view state
pub struct DownloadView {
    pub url: String,
    pub folder: String,
    pub status: StatusLog,
    pub phase: DownloadPhase,
    /// Progress of the current item, 0.0 to 1.0
    pub progress: f32,
    /// (index, total) of the playlist item being fetched
    pub item: Option<(u32, u32)>,
}

impl Default for DownloadView {
    fn default() -> Self {
        Self {
            url: String::new(),
            folder: String::new(),
            status: StatusLog::default(),
            phase: DownloadPhase::Idle,
            progress: 0.0,
            item: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DownloadMessage {
    UrlChanged(String),
    FolderChanged(String),
    ChooseFolderPressed,
    DownloadPressed,
    CancelPressed,
}

impl DownloadView {
    pub fn is_downloading(&self) -> bool {
        self.phase == DownloadPhase::Running
    }

    pub fn update(&mut self, message: DownloadMessage) {
        match message {
            DownloadMessage::UrlChanged(url) => {
                self.url = url;
            }
            DownloadMessage::FolderChanged(folder) => {
                self.folder = folder;
            }
            DownloadMessage::ChooseFolderPressed
            | DownloadMessage::DownloadPressed
            | DownloadMessage::CancelPressed => {
                // Will be handled by the app
            }
        }
    }

    /// Show a line of utility output and pick up progress hints from it.
    pub fn push_output(&mut self, line: String) {
        match OutputLine::parse(&line) {
            OutputLine::ItemStarted { index, total } => {
                self.item = Some((index, total));
                self.progress = 0.0;
            }
            OutputLine::Progress(percent) => {
                self.progress = percent / 100.0;
            }
            _ => {}
        }
        self.status.push(line);
    }

    pub fn start(&mut self) {
        self.phase = DownloadPhase::Running;
        self.progress = 0.0;
        self.item = None;
        self.status.set("Starting download...");
    }

    pub fn finish(&mut self, phase: DownloadPhase, message: impl Into<String>) {
        self.phase = phase;
        self.progress = 0.0;
        self.item = None;
        self.status.set(message);
    }

    pub fn view(&self) -> Element<'_, DownloadMessage> {
        let running = self.is_downloading();

        let item_label = match self.item {
            Some((index, total)) => format!("Item {} of {}", index, total),
            None => String::new(),
        };

        column![
            text("Audio Downloader").size(32),
            Space::new().height(Length::Fixed(10.0)),
            row![
                text("YouTube URL:").size(16),
                text_input("Paste a playlist URL...", &self.url)
                    .on_input(DownloadMessage::UrlChanged)
                    .padding(10),
            ]
            .spacing(5)
            .align_y(Alignment::Center),
            row![
                text("Output Folder:").size(16),
                text_input("~/Music", &self.folder)
                    .on_input(DownloadMessage::FolderChanged)
                    .padding(10),
                button("Choose...")
                    .on_press_maybe((!running).then_some(DownloadMessage::ChooseFolderPressed))
                    .padding([10, 20]),
            ]
            .spacing(5)
            .align_y(Alignment::Center),
            row![
                button("Download")
                    .on_press_maybe((!running).then_some(DownloadMessage::DownloadPressed))
                    .padding([10, 20]),
                button("Cancel")
                    .on_press_maybe(running.then_some(DownloadMessage::CancelPressed))
                    .padding([10, 20]),
            ]
            .spacing(10),
            progress_bar(0.0..=1.0, self.progress),
            text(item_label).size(14),
            text(self.status.render()).size(14),
        ]
        .padding(20)
        .spacing(10)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_updates_progress_and_item() {
        let mut view = DownloadView::default();
        view.start();

        view.push_output("[download] Downloading item 2 of 5".to_string());
        view.push_output("[download]  50.0% of 3.00MiB".to_string());

        assert_eq!(view.item, Some((2, 5)));
        assert!((view.progress - 0.5).abs() < f32::EPSILON);
        assert!(view.status.render().ends_with("[download]  50.0% of 3.00MiB"));
    }

    #[test]
    fn test_finish_resets_running_state() {
        let mut view = DownloadView::default();
        view.start();
        assert!(view.is_downloading());

        view.finish(DownloadPhase::Succeeded, "Download completed successfully.");
        assert!(!view.is_downloading());
        assert_eq!(view.item, None);
        assert_eq!(view.status.render(), "Download completed successfully.");
    }
}
