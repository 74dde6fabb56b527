//! Path utilities for locating installed applications.
//!
//! This module resolves the XDG base directories that hold desktop entries (via
//! the `dirs` crate, plus `$XDG_DATA_DIRS`, which `dirs` does not cover) and
//! handles tilde expansion for user-supplied paths.

use std::path::PathBuf;

/// Default value of `$XDG_DATA_DIRS` when the variable is unset or empty.
const DEFAULT_DATA_DIRS: &str = "/usr/local/share:/usr/share";

const CONFIG_DIR: &str = "searchbox";
const CONFIG_FILE: &str = "config.toml";

/// Returns the user's home directory.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths that do not start with `~` are returned unchanged, as are tilde paths
/// when the home directory is unknown.
///
/// # Examples
///
/// ```
/// use searchbox::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/usr/share/applications").to_str(), Some("/usr/share/applications"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = home_dir() else {
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

/// Returns the user data directory (`$XDG_DATA_HOME`, else `~/.local/share`).
#[must_use]
pub fn data_home() -> Option<PathBuf> {
    dirs::data_dir()
}

/// Returns the application directories in lookup order.
///
/// The user directory comes first so its entries shadow system-wide ones:
///
/// 1. `$XDG_DATA_HOME/applications`
/// 2. `<dir>/applications` for each entry of `$XDG_DATA_DIRS`
#[must_use]
pub fn application_dirs() -> Vec<PathBuf> {
    let data_dirs = std::env::var("XDG_DATA_DIRS")
        .ok()
        .filter(|dirs| !dirs.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_DIRS.to_string());

    application_dirs_from(data_home(), &data_dirs)
}

/// Builds the lookup order from an explicit data home and `XDG_DATA_DIRS` value.
#[must_use]
pub fn application_dirs_from(data_home: Option<PathBuf>, data_dirs: &str) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = data_home.into_iter().collect();
    dirs.extend(
        data_dirs
            .split(':')
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from),
    );

    let mut result: Vec<PathBuf> = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let applications = dir.join("applications");
        if !result.contains(&applications) {
            result.push(applications);
        }
    }
    result
}

/// Returns the default configuration file path.
///
/// `$XDG_CONFIG_HOME/searchbox/config.toml`, else `~/.config/searchbox/config.toml`.
#[must_use]
pub fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
