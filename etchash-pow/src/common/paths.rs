/// Default on-disk location for cache and dataset files
///
/// The directory names differ in case between platforms. Existing installs
/// depend on both spellings, so they are kept as they are.

use std::path::{Path, PathBuf};

/// Directory under the home directory on Windows
const WINDOWS_DIR: [&str; 2] = ["AppData", "Etchash"];

/// Directory under the home directory everywhere else
const UNIX_DIR: &str = ".etchash";

/// Platform default directory for cache and dataset files.
///
/// Only the path is computed; nothing is created or read.
pub fn default_dir() -> PathBuf {
    default_dir_under(&home_dir(), cfg!(windows))
}

/// Home directory of the current user, falling back to `$HOME`.
fn home_dir() -> PathBuf {
    dirs::home_dir()
        .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
        .unwrap_or_default()
}

pub(crate) fn default_dir_under(home: &Path, windows: bool) -> PathBuf {
    if windows {
        WINDOWS_DIR.iter().fold(home.to_path_buf(), |dir, part| dir.join(part))
    } else {
        home.join(UNIX_DIR)
    }
}
