//! Credential Store for repo-ready.
//!
//! Persists the single GitHub bearer token as a plaintext file in the user's
//! home directory, readable and writable by the owner only.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::platform;
use crate::types::errors::AuthError;

/// Trait defining credential storage operations.
pub trait CredentialStoreTrait {
    fn store(&self, token: &str) -> Result<(), AuthError>;
    fn retrieve(&self) -> Result<Option<String>, AuthError>;
    fn token_path(&self) -> &PathBuf;
}

/// Credential store backed by a single owner-only file.
///
/// Constructed once per run and passed by reference; the token file holds at
/// most one token, last write wins.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Creates a store at the fixed home-directory path.
    pub fn new() -> Self {
        Self {
            path: platform::token_file_path(),
        }
    }

    /// Creates a store at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStoreTrait for CredentialStore {
    /// Writes the token, overwriting any existing one.
    ///
    /// On Unix the file is created with mode `0o600`. A filesystem refusal
    /// is propagated, not retried.
    fn store(&self, token: &str) -> Result<(), AuthError> {
        fs::write(&self.path, token)
            .map_err(|e| AuthError::TokenFileError(format!("Failed to save token: {}", e)))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::TokenFileError(format!("Failed to restrict token file: {}", e))
            })?;
        }

        Ok(())
    }

    /// Returns the trimmed token, or `None` when no token file exists.
    ///
    /// Absence is a normal state, not an error; only a real read failure
    /// produces `Err`.
    fn retrieve(&self) -> Result<Option<String>, AuthError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content.trim().to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AuthError::TokenFileError(format!(
                "Failed to read token: {}",
                e
            ))),
        }
    }

    fn token_path(&self) -> &PathBuf {
        &self.path
    }
}
