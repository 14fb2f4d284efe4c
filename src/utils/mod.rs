use std::path::{Path, PathBuf};

/// Destination used when the user does not pick one.
pub const DEFAULT_DESTINATION: &str = "~/Music";

/// Expand a leading `~` to the current user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, dirs::home_dir().as_deref())
}

/// Expand a leading `~` against `home`. `~user` forms and paths without a
/// home directory are returned unchanged.
pub fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home.to_path_buf();
    }

    match path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let home = Path::new("/home/listener");
        assert_eq!(expand_tilde_with("~", Some(home)), PathBuf::from("/home/listener"));
        assert_eq!(
            expand_tilde_with("~/Music/mixes", Some(home)),
            PathBuf::from("/home/listener/Music/mixes")
        );
    }

    #[test]
    fn test_expand_tilde_leaves_other_paths() {
        let home = Path::new("/home/listener");
        assert_eq!(expand_tilde_with("/tmp/out", Some(home)), PathBuf::from("/tmp/out"));
        assert_eq!(expand_tilde_with("~other/x", Some(home)), PathBuf::from("~other/x"));
        assert_eq!(expand_tilde_with("music/~", Some(home)), PathBuf::from("music/~"));
        assert_eq!(expand_tilde_with("~/Music", None), PathBuf::from("~/Music"));
    }
}
