// repo-ready platform paths for Windows
// Config: %APPDATA%/repo-ready

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for repo-ready on Windows.
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| {
        let profile = env::var("USERPROFILE").unwrap_or_else(|_| String::from("C:\\"));
        format!("{}\\AppData\\Roaming", profile)
    });
    PathBuf::from(appdata).join("repo-ready")
}
