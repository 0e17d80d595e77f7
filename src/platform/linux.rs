// repo-ready platform paths for Linux
// Config: ~/.config/repo-ready

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for repo-ready on Linux.
/// Uses `$XDG_CONFIG_HOME/repo-ready` if set, otherwise `~/.config/repo-ready`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("repo-ready")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("repo-ready")
    }
}
