//! Thin GitHub REST client for repo-ready.
//!
//! Covers exactly the four calls the tool needs: contents lookup, label
//! listing, label deletion, and label creation. Not a general API client.

use reqwest::StatusCode;

use crate::types::config::RepoInfo;
use crate::types::errors::{FetchError, LabelError};
use crate::types::github::{ContentEntry, RemoteContent};
use crate::types::label::Label;

const GITHUB_API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("repo-ready/", env!("CARGO_PKG_VERSION"));

/// Result of a label deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The label was already gone (HTTP 404), e.g. raced by another process.
    AlreadyAbsent,
}

/// Result of a label creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// A label with that name already exists (HTTP 422, `already_exists`).
    AlreadyExists,
}

/// Authenticated GitHub API client.
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl GitHubClient {
    /// Creates a client against the public GitHub API.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(token, GITHUB_API_BASE)
    }

    /// Creates a client against an explicit API base URL (tests point this
    /// at a mock server).
    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
    }

    /// Looks up `path` on `repo_info.branch`, distinguishing files from
    /// directory listings.
    ///
    /// A missing repository or path surfaces as `FetchError::NotFound`
    /// naming the path and branch.
    pub async fn get_content(
        &self,
        repo_info: &RepoInfo,
        path: &str,
    ) -> Result<RemoteContent, FetchError> {
        let encoded_path = path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let url = format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_base,
            repo_info.owner,
            repo_info.repo,
            encoded_path,
            urlencoding::encode(&repo_info.branch)
        );

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(FetchError::NotFound {
                path: path.to_string(),
                branch: repo_info.branch.clone(),
            }),
            status if status.is_success() => {
                let value: serde_json::Value = response
                    .json()
                    .await
                    .map_err(|e| FetchError::ApiError(e.to_string()))?;

                if value.is_array() {
                    let entries: Vec<ContentEntry> = serde_json::from_value(value)
                        .map_err(|e| FetchError::ApiError(e.to_string()))?;
                    Ok(RemoteContent::Directory(entries))
                } else {
                    let entry: ContentEntry = serde_json::from_value(value)
                        .map_err(|e| FetchError::ApiError(e.to_string()))?;
                    Ok(RemoteContent::File(entry))
                }
            }
            status => Err(FetchError::ApiError(format!(
                "contents lookup for '{}' returned {}",
                path, status
            ))),
        }
    }

    /// Lists up to 100 labels of a repository.
    ///
    /// Pagination beyond the first page is out of scope.
    pub async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>, LabelError> {
        let url = format!(
            "{}/repos/{}/{}/labels?per_page=100",
            self.api_base, owner, repo
        );

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| LabelError::NetworkError(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(LabelError::RepoNotFound(format!("{}/{}", owner, repo))),
            status if status.is_success() => response
                .json()
                .await
                .map_err(|e| LabelError::ApiError(e.to_string())),
            status => Err(LabelError::ApiError(format!(
                "listing labels of {}/{} returned {}",
                owner, repo, status
            ))),
        }
    }

    /// Deletes one label by name.
    ///
    /// A 404 means the label is already gone and reports `AlreadyAbsent`
    /// instead of failing.
    pub async fn delete_label(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
    ) -> Result<DeleteOutcome, LabelError> {
        let url = format!(
            "{}/repos/{}/{}/labels/{}",
            self.api_base,
            owner,
            repo,
            urlencoding::encode(name)
        );

        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| LabelError::NetworkError(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(DeleteOutcome::AlreadyAbsent),
            status if status.is_success() => Ok(DeleteOutcome::Deleted),
            status => Err(LabelError::ApiError(format!(
                "deleting label '{}' returned {}",
                name, status
            ))),
        }
    }

    /// Creates one label.
    ///
    /// A 422 carrying the `already_exists` error code reports
    /// `AlreadyExists` instead of failing.
    pub async fn create_label(
        &self,
        owner: &str,
        repo: &str,
        label: &Label,
    ) -> Result<CreateOutcome, LabelError> {
        let url = format!("{}/repos/{}/{}/labels", self.api_base, owner, repo);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .json(label)
            .send()
            .await
            .map_err(|e| LabelError::NetworkError(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(CreateOutcome::Created),
            StatusCode::UNPROCESSABLE_ENTITY => {
                let body: serde_json::Value = response.json().await.unwrap_or_default();
                if body["errors"][0]["code"] == "already_exists" {
                    Ok(CreateOutcome::AlreadyExists)
                } else {
                    Err(LabelError::ApiError(format!(
                        "creating label '{}' rejected: {}",
                        label.name, body
                    )))
                }
            }
            status => Err(LabelError::ApiError(format!(
                "creating label '{}' returned {}",
                label.name, status
            ))),
        }
    }
}
