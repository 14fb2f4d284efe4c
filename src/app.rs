use crate::application::{DownloadCoordinator, DownloadEvent};
use crate::config::{Settings, SettingsStore};
use crate::domain::{AppError, DownloadOutcome, DownloadPhase, DownloadRequest};
use crate::ui::{DownloadMessage, DownloadView};
use crate::utils::DEFAULT_DESTINATION;
use crate::ytdlp::YtDlp;
use futures::StreamExt;
use iced::Task;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::warn;

pub struct DownloadApp {
    view: DownloadView,
    coordinator: DownloadCoordinator,
    settings: Settings,
    store: Option<SettingsStore>,
    // Fires to stop the active run
    cancel: Option<CancellationToken>,
}

impl Default for DownloadApp {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadApp {
    pub fn new() -> Self {
        let store = SettingsStore::default_location();
        let settings = store.as_ref().map(SettingsStore::load).unwrap_or_default();
        Self::with_settings(settings, store)
    }

    pub fn with_settings(settings: Settings, store: Option<SettingsStore>) -> Self {
        let coordinator = DownloadCoordinator::new(YtDlp::new(settings.ytdlp_config(None)));
        let view = DownloadView {
            folder: settings
                .last_destination
                .clone()
                .unwrap_or_else(|| DEFAULT_DESTINATION.to_string()),
            ..DownloadView::default()
        };

        Self {
            view,
            coordinator,
            settings,
            store,
            cancel: None,
        }
    }

    fn remember_destination(&mut self, folder: &str) {
        self.settings.last_destination = Some(folder.to_string());
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&self.settings) {
                warn!(error = %e, "could not save settings");
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(DownloadMessage),
    /// Folder picked in the dialog, `None` if the dialog was dismissed
    FolderSelected(Option<PathBuf>),
    Download(DownloadEvent),
}

pub fn update(app: &mut DownloadApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => {
            app.view.update(ui_msg.clone());

            match ui_msg {
                DownloadMessage::ChooseFolderPressed => {
                    return Task::perform(
                        async {
                            rfd::AsyncFileDialog::new()
                                .set_title("Select Output Folder")
                                .pick_folder()
                                .await
                                .map(|handle| handle.path().to_path_buf())
                        },
                        Message::FolderSelected,
                    );
                }
                DownloadMessage::DownloadPressed if !app.view.is_downloading() => {
                    return start_download(app);
                }
                DownloadMessage::CancelPressed => {
                    if let Some(cancel) = &app.cancel {
                        cancel.cancel();
                        app.view.status.push("Cancelling...");
                    }
                }
                _ => {}
            }
        }
        Message::FolderSelected(Some(path)) => {
            app.view.folder = path.display().to_string();
        }
        Message::FolderSelected(None) => {}
        Message::Download(DownloadEvent::Line(line)) => {
            // Late lines from a cancelled run are dropped
            if app.cancel.as_ref().is_some_and(|c| !c.is_cancelled()) {
                app.view.push_output(line);
            }
        }
        Message::Download(DownloadEvent::Finished(result)) => {
            app.cancel = None;
            let (phase, message) = finished_status(&result);
            app.view.finish(phase, message);
        }
    }
    Task::none()
}

fn start_download(app: &mut DownloadApp) -> Task<Message> {
    if app.view.url.trim().is_empty() {
        app.view.status.set("Please enter a YouTube URL.");
        return Task::none();
    }
    if app.view.folder.trim().is_empty() {
        app.view.status.set("Please select an output folder.");
        return Task::none();
    }

    let request = match DownloadRequest::new(&app.view.url, &app.view.folder) {
        Ok(request) => request,
        Err(e) => {
            app.view.status.set(format!("Error: {}", e));
            return Task::none();
        }
    };

    let folder = app.view.folder.trim().to_string();
    app.remember_destination(&folder);

    let cancel = CancellationToken::new();
    app.cancel = Some(cancel.clone());
    app.view.start();

    // Runs on iced's tokio executor, results come back as messages
    Task::stream(
        app.coordinator
            .download_stream(request, cancel)
            .map(Message::Download),
    )
}

fn finished_status(result: &Result<DownloadOutcome, AppError>) -> (DownloadPhase, String) {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => return (DownloadPhase::Failed, format!("Error: {}", e)),
    };

    let message = match outcome {
        DownloadOutcome::Success => "Download completed successfully.".to_string(),
        DownloadOutcome::Failure(code) => format!("Download failed with exit code {}.", code),
        DownloadOutcome::Cancelled => "Download cancelled.".to_string(),
    };
    (outcome.phase(), message)
}

pub fn view(app: &DownloadApp) -> iced::Element<'_, Message> {
    app.view.view().map(Message::UiMessage)
}
