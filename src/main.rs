use audio_downloader::{app, logging};
use iced::window;

fn main() -> iced::Result {
    logging::init("audio_downloader=info");

    iced::application(app::DownloadApp::default, app::update, app::view)
        .title("Audio Downloader")
        .window(window::Settings {
            size: iced::Size::new(560.0, 460.0),
            ..Default::default()
        })
        .run()
}
