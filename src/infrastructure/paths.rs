//! Path utilities: data directory location and tilde expansion.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// File name of the preference store inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Returns the data directory for designkit state.
///
/// Platform-specific locations:
/// - **Linux**: `$XDG_DATA_HOME/designkit` or `~/.local/share/designkit`
/// - **macOS**: `~/Library/Application Support/dev.designkit.designkit`
/// - **Windows**: `%APPDATA%\designkit\designkit\data`
///
/// Falls back to a `designkit` directory under the system temp dir when no
/// home directory can be determined.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    ProjectDirs::from("dev", "designkit", "designkit").map_or_else(
        || std::env::temp_dir().join("designkit"),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Default location of the preference store.
#[must_use]
pub fn default_preferences_path() -> PathBuf {
    get_data_dir().join(PREFERENCES_FILE)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or any path when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use designkit::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()) else {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_tilde_paths_are_untouched() {
        assert_eq!(expand_tilde("relative/file.json"), PathBuf::from("relative/file.json"));
        assert_eq!(expand_tilde("~user/file"), PathBuf::from("~user/file"));
    }

    #[test]
    fn tilde_expands_under_home() {
        if let Some(dirs) = BaseDirs::new() {
            assert_eq!(expand_tilde("~/prefs.json"), dirs.home_dir().join("prefs.json"));
            assert_eq!(expand_tilde("~"), dirs.home_dir());
        }
    }

    #[test]
    fn preferences_live_in_data_dir() {
        assert_eq!(default_preferences_path(), get_data_dir().join("preferences.json"));
    }
}
