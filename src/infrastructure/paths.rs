//! Path helpers for locating catalog and configuration files.

use std::path::PathBuf;

/// Expands a leading `~` to the user's home directory.
///
/// The home directory is read from `$HOME`. If it is unset the path is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use photofinder::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/srv/db.json"), PathBuf::from("/srv/db.json"));
/// assert_eq!(expand_tilde("data/db.json"), PathBuf::from("data/db.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = std::env::var_os("HOME").map(PathBuf::from) else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
