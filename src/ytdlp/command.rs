use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Archive file the utility keeps inside the destination folder.
pub const ARCHIVE_FILE_NAME: &str = "downloaded.txt";

const AUDIO_FORMAT: &str = "mp3";
const AUDIO_QUALITY: &str = "160K";
const STREAM_FORMAT: &str = "bestaudio[ext=m4a]";
const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";
const POSTPROCESSOR_ARGS: &str = "-id3v2_version 3";

pub fn archive_path(destination: &Path) -> PathBuf {
    destination.join(ARCHIVE_FILE_NAME)
}

/// Arguments for one playlist run, in the order the utility receives them.
/// The source reference is always last.
pub fn build_args(source: &str, destination: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "--ignore-errors",
        "--format",
        STREAM_FORMAT,
        "--extract-audio",
        "--audio-format",
        AUDIO_FORMAT,
        "--audio-quality",
        AUDIO_QUALITY,
    ]
    .iter()
    .map(OsString::from)
    .collect();

    args.push("-P".into());
    args.push(destination.into());

    args.extend(
        [
            "--output",
            OUTPUT_TEMPLATE,
            "--yes-playlist",
            "--embed-metadata",
            "--embed-thumbnail",
            "--add-metadata",
            "--postprocessor-args",
            POSTPROCESSOR_ARGS,
            "--download-archive",
        ]
        .iter()
        .map(OsString::from),
    );
    args.push(archive_path(destination).into());

    args.push(source.into());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    fn value_after<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
        let pos = args.iter().position(|a| a == flag)?;
        args.get(pos + 1).map(String::as_str)
    }

    #[test]
    fn test_build_args_full_list() {
        let url = "https://example.com/playlist?list=ABC";
        let args = as_strings(&build_args(url, Path::new("/tmp/out")));

        assert_eq!(
            args,
            vec![
                "--ignore-errors",
                "--format",
                "bestaudio[ext=m4a]",
                "--extract-audio",
                "--audio-format",
                "mp3",
                "--audio-quality",
                "160K",
                "-P",
                "/tmp/out",
                "--output",
                "%(title)s.%(ext)s",
                "--yes-playlist",
                "--embed-metadata",
                "--embed-thumbnail",
                "--add-metadata",
                "--postprocessor-args",
                "-id3v2_version 3",
                "--download-archive",
                "/tmp/out/downloaded.txt",
                url,
            ]
        );
    }

    #[test]
    fn test_destination_and_archive_flags() {
        let url = "https://example.com/playlist?list=ABC";
        let args = as_strings(&build_args(url, Path::new("/tmp/out")));

        assert_eq!(value_after(&args, "-P"), Some("/tmp/out"));
        assert_eq!(
            value_after(&args, "--download-archive"),
            Some("/tmp/out/downloaded.txt")
        );
        assert_eq!(args.last().map(String::as_str), Some(url));
    }

    #[test]
    fn test_archive_points_at_seeded_file() {
        let dir = tempfile::tempdir().unwrap();
        let seeded = dir.path().join(ARCHIVE_FILE_NAME);
        std::fs::write(&seeded, "youtube abc123\n").unwrap();

        let args = build_args("https://example.com/watch?v=abc123", dir.path());
        let pos = args.iter().position(|a| a == "--download-archive").unwrap();
        assert_eq!(PathBuf::from(&args[pos + 1]), seeded);
    }
}
