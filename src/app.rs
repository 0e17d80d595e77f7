//! App Core for repo-ready.
//!
//! Central struct wiring the source catalog and the credential store, and
//! handing out an authenticated GitHub client on demand. The credential
//! store is constructed once per run and shared by reference; no call site
//! touches the token file directly.

use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;

use crate::services::catalog::{SourceCatalog, SourceCatalogTrait};
use crate::services::credential_store::{CredentialStore, CredentialStoreTrait};
use crate::services::github_client::GitHubClient;
use crate::services::oauth_flow::{self, OAuthOptions};
use crate::types::errors::AuthError;

/// Central application struct holding the per-run services.
pub struct App {
    pub catalog: SourceCatalog,
    pub credentials: Arc<CredentialStore>,
}

impl App {
    /// Creates an App against the platform default paths.
    pub fn new() -> Self {
        Self {
            catalog: SourceCatalog::new(None),
            credentials: Arc::new(CredentialStore::new()),
        }
    }

    /// Creates an App with explicit catalog and token paths.
    pub fn with_paths(catalog_path: PathBuf, token_path: PathBuf) -> Self {
        Self {
            catalog: SourceCatalog::new(Some(catalog_path)),
            credentials: Arc::new(CredentialStore::with_path(token_path)),
        }
    }

    /// Directory relative label file paths resolve against.
    pub fn catalog_base_dir(&self) -> PathBuf {
        self.catalog.base_dir()
    }

    /// Returns an authenticated GitHub client, running the OAuth flow first
    /// when no token is stored yet.
    pub async fn github_client(&self) -> Result<GitHubClient, AuthError> {
        let token = match self.credentials.retrieve()? {
            Some(token) => token,
            None => {
                println!(
                    "{}",
                    "⚠️ GitHub token not found. Initiating login...".yellow()
                );
                let opts = OAuthOptions::from_env()?;
                oauth_flow::login(opts, self.credentials.clone()).await?
            }
        };

        Ok(GitHubClient::new(token))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
