// Persisted settings shared by both front ends

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ytdlp::YtDlpConfig;

/// Environment variable that overrides the utility program.
pub const PROGRAM_ENV: &str = "AUDIO_DOWNLOADER_YTDLP";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ytdlp_path: Option<PathBuf>,
    pub last_destination: Option<String>,
}

impl Settings {
    /// Pick the utility program: explicit override, then environment, then
    /// the saved path, then plain `yt-dlp`.
    pub fn ytdlp_config(&self, cli_override: Option<PathBuf>) -> YtDlpConfig {
        let env_override = std::env::var_os(PROGRAM_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.ytdlp_config_with(cli_override, env_override)
    }

    fn ytdlp_config_with(
        &self,
        cli_override: Option<PathBuf>,
        env_override: Option<PathBuf>,
    ) -> YtDlpConfig {
        match cli_override
            .or(env_override)
            .or_else(|| self.ytdlp_path.clone())
        {
            Some(program) => YtDlpConfig { program },
            None => YtDlpConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/audio-downloader/settings.json`
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join("audio-downloader").join("settings.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files fall back to defaults.
    pub fn load(&self) -> Settings {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Settings::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read settings");
                return Settings::default();
            }
        };

        serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "ignoring invalid settings");
            Settings::default()
        })
    }

    pub fn save(&self, settings: &Settings) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create settings folder: {}", e))?;
        }

        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| format!("JSON serialize error: {}", e))?;

        fs::write(&self.path, json)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        Ok(())
    }
}
