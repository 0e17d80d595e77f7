// repo-ready platform abstraction
// Provides platform-specific paths for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for repo-ready.
///
/// Holds `template-sources.json` and any bundled label files.
///
/// - **Linux**: `~/.config/repo-ready` (or `$XDG_CONFIG_HOME/repo-ready`)
/// - **macOS**: `~/Library/Application Support/repo-ready`
/// - **Windows**: `%APPDATA%/repo-ready`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the user's home directory.
///
/// `$HOME` on Unix, `%USERPROFILE%` on Windows, falling back to the current
/// directory when neither is set.
pub fn get_home_dir() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Returns the fixed path of the persisted GitHub token file.
pub fn token_file_path() -> PathBuf {
    get_home_dir().join(".repo-ready-github-token")
}
