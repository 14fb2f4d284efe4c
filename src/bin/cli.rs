use std::io;
use std::process::ExitCode;

use audio_downloader::{
    application::DownloadCoordinator,
    cli::{self, App, Args},
    config::SettingsStore,
    logging,
    ytdlp::YtDlp,
};
use clap::Parser;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(if args.verbose {
        "audio_downloader=debug"
    } else {
        "audio_downloader=warn"
    });

    let settings = SettingsStore::default_location()
        .map(|store| store.load())
        .unwrap_or_default();
    let coordinator = DownloadCoordinator::new(YtDlp::new(settings.ytdlp_config(args.ytdlp)));
    let app = App::new(coordinator, args.verbose);

    // Gather inputs first so the download itself never blocks on stdin
    let request = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        cli::resolve_request(args.playlist_url, args.output_folder, &mut input, &mut output)
    };

    let request = match request {
        Ok(request) => request,
        Err(error) => {
            app.print_error(&error);
            return Ok(ExitCode::from(1));
        }
    };

    let result = app.run(request).await;
    Ok(ExitCode::from(cli::exit_code(&result)))
}
