use std::io::{BufRead, Write};

use crate::domain::{AppError, DownloadRequest};
use crate::utils::DEFAULT_DESTINATION;

const URL_PROMPT: &str = "Enter the YouTube playlist URL: ";
const FOLDER_PROMPT: &str = "Enter the output folder (Press Enter for default '~/Music'): ";

/// Fill in whatever the command line left out by asking on `input`, then
/// build a fully resolved request.
pub fn resolve_request<R, W>(
    playlist_url: Option<String>,
    output_folder: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<DownloadRequest, AppError>
where
    R: BufRead,
    W: Write,
{
    let url = match non_blank(playlist_url) {
        Some(url) => url,
        None => ask_url(input, output)?,
    };

    let folder = match non_blank(output_folder) {
        Some(folder) => folder,
        None => ask(input, output, FOLDER_PROMPT)?
            .filter(|answer| !answer.is_empty())
            .unwrap_or_else(|| DEFAULT_DESTINATION.to_string()),
    };

    DownloadRequest::new(&url, &folder)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Re-prompt until a URL is given. End of input means there is none.
fn ask_url<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String, AppError> {
    loop {
        match ask(input, output, URL_PROMPT)? {
            Some(url) if !url.is_empty() => return Ok(url),
            Some(_) => continue,
            None => return Err(AppError::MissingInput("playlist URL")),
        }
    }
}

/// `None` on end of input, otherwise the trimmed answer.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    write!(output, "{}", prompt).map_err(|e| AppError::Io(e.to_string()))?;
    output.flush().map_err(|e| AppError::Io(e.to_string()))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| AppError::Io(e.to_string()))?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;

    use super::*;

    fn resolve(
        url: Option<&str>,
        folder: Option<&str>,
        stdin: &str,
    ) -> (Result<DownloadRequest, AppError>, String) {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = resolve_request(
            url.map(String::from),
            folder.map(String::from),
            &mut input,
            &mut output,
        );
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_arguments_skip_prompts() {
        let (result, prompts) = resolve(Some("https://example.com/p"), Some("/tmp/out"), "");
        let request = result.unwrap();

        assert_eq!(request.source, "https://example.com/p");
        assert_eq!(request.destination, PathBuf::from("/tmp/out"));
        assert!(prompts.is_empty());
    }

    #[test]
    fn test_prompts_for_missing_values() {
        let (result, prompts) = resolve(None, None, "https://example.com/p\n/srv/music\n");
        let request = result.unwrap();

        assert_eq!(request.source, "https://example.com/p");
        assert_eq!(request.destination, PathBuf::from("/srv/music"));
        assert_eq!(prompts, format!("{}{}", URL_PROMPT, FOLDER_PROMPT));
    }

    #[test]
    fn test_blank_url_is_asked_again() {
        let (result, prompts) = resolve(None, Some("/tmp/out"), "\n   \nhttps://example.com/p\n");

        assert_eq!(result.unwrap().source, "https://example.com/p");
        assert_eq!(prompts.matches(URL_PROMPT).count(), 3);
    }

    #[test]
    fn test_end_of_input_without_url() {
        let (result, _) = resolve(None, Some("/tmp/out"), "\n");
        assert_eq!(result, Err(AppError::MissingInput("playlist URL")));
    }

    #[test]
    fn test_empty_folder_answer_uses_default() {
        let (result, _) = resolve(Some("https://example.com/p"), None, "\n");
        let expected = crate::utils::expand_tilde(DEFAULT_DESTINATION);
        assert_eq!(result.unwrap().destination, expected);

        let (result, _) = resolve(Some("https://example.com/p"), Some("  "), "");
        assert_eq!(result.unwrap().destination, expected);
    }
}
