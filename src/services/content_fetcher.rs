//! Remote Content Fetcher for repo-ready.
//!
//! Copies single files out of a remote GitHub repository into the local
//! project, decoding the base64 transport payload. Directories are rejected;
//! the tool never copies recursively.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::services::github_client::GitHubClient;
use crate::types::config::RepoInfo;
use crate::types::errors::FetchError;
use crate::types::github::RemoteContent;

/// Fetcher bound to one API client.
pub struct ContentFetcher<'a> {
    client: &'a GitHubClient,
}

impl<'a> ContentFetcher<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Fetches `remote_path` from the repository at its configured branch
    /// and writes the decoded bytes to `local_dest`, overwriting any
    /// existing file.
    ///
    /// The parent directory is created as needed. Nothing is written when
    /// the remote path is missing or is not a regular file.
    pub async fn fetch(
        &self,
        repo_info: &RepoInfo,
        remote_path: &str,
        local_dest: &Path,
    ) -> Result<(), FetchError> {
        let content = self.client.get_content(repo_info, remote_path).await?;

        let entry = match content {
            RemoteContent::Directory(_) => {
                return Err(FetchError::NotAFile {
                    path: remote_path.to_string(),
                    content_type: "directory".to_string(),
                })
            }
            RemoteContent::File(entry) if entry.entry_type == "file" => entry,
            RemoteContent::File(entry) => {
                return Err(FetchError::NotAFile {
                    path: remote_path.to_string(),
                    content_type: entry.entry_type,
                })
            }
        };

        let payload = entry.content.unwrap_or_default();
        let bytes = decode_transport(&payload)?;

        if let Some(parent) = local_dest.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FetchError::FileSystemError(format!("Failed to create directory: {}", e))
            })?;
        }

        fs::write(local_dest, bytes)
            .map_err(|e| FetchError::FileSystemError(format!("Failed to write file: {}", e)))?;

        Ok(())
    }
}

/// Decodes the contents-API base64 payload, which arrives wrapped in
/// newlines.
fn decode_transport(payload: &str) -> Result<Vec<u8>, FetchError> {
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    BASE64
        .decode(compact.as_bytes())
        .map_err(|e| FetchError::DecodeError(e.to_string()))
}
