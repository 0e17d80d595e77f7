// repo-ready platform paths for macOS
// Config: ~/Library/Application Support/repo-ready

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for repo-ready on macOS.
pub fn get_config_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Application Support")
        .join("repo-ready")
}
