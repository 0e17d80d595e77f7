//! Label Synchronizer for repo-ready.
//!
//! Replaces a target repository's label set with a desired set, two-phase:
//! delete everything present, then create everything desired. Both phases
//! are idempotent per label and best-effort across the batch; there is no
//! rollback because GitHub has no atomic multi-label operation.

use std::fs;
use std::path::Path;

use colored::Colorize;

use crate::services::github_client::{CreateOutcome, DeleteOutcome, GitHubClient};
use crate::types::config::{LabelSet, LabelSourceKind};
use crate::types::errors::LabelError;
use crate::types::label::{Label, LabelOp, LabelStatus, LabelSyncReport};

/// Synchronizer bound to one API client.
pub struct LabelSynchronizer<'a> {
    client: &'a GitHubClient,
}

impl<'a> LabelSynchronizer<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Current labels of a repository (first 100).
    pub async fn fetch_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>, LabelError> {
        self.client.list_labels(owner, repo).await
    }

    /// Replaces the target repository's labels with `desired`.
    ///
    /// Fetching the current set is the only fatal step; every delete and
    /// create afterwards records its own outcome and the batch continues.
    /// A delete answered 404 or a create answered `already_exists` is the
    /// end state already holding and counts as satisfied.
    pub async fn sync(
        &self,
        owner: &str,
        repo: &str,
        desired: &[Label],
    ) -> Result<LabelSyncReport, LabelError> {
        let current = self.fetch_labels(owner, repo).await?;
        let mut report = LabelSyncReport::default();

        for (op, label) in replace_plan(&current, desired) {
            let status = match op {
                LabelOp::Delete => {
                    match self.client.delete_label(owner, repo, &label.name).await {
                        Ok(DeleteOutcome::Deleted) => LabelStatus::Applied,
                        Ok(DeleteOutcome::AlreadyAbsent) => {
                            println!(
                                "{}",
                                format!(
                                    "  ⚠️ Label '{}' not found, skipping deletion (might have been deleted already).",
                                    label.name
                                )
                                .yellow()
                            );
                            LabelStatus::AlreadySatisfied
                        }
                        Err(e) => {
                            eprintln!(
                                "{}",
                                format!("  🚫 Failed to delete label '{}': {}", label.name, e)
                                    .red()
                            );
                            LabelStatus::Failed(e.to_string())
                        }
                    }
                }
                LabelOp::Create => {
                    match self.client.create_label(owner, repo, &label).await {
                        Ok(CreateOutcome::Created) => LabelStatus::Applied,
                        Ok(CreateOutcome::AlreadyExists) => {
                            println!(
                                "{}",
                                format!("  ⚠️ Label '{}' already exists, skipping.", label.name)
                                    .yellow()
                            );
                            LabelStatus::AlreadySatisfied
                        }
                        Err(e) => {
                            eprintln!(
                                "{}",
                                format!("  🚫 Failed to create label '{}': {}", label.name, e)
                                    .red()
                            );
                            LabelStatus::Failed(e.to_string())
                        }
                    }
                }
            };
            report.push(&label.name, op, status);
        }

        Ok(report)
    }

    /// Resolves a configured label set to its concrete labels.
    ///
    /// `json_url` sources read the *source* repository's existing labels;
    /// `json_file` sources parse a local JSON array, resolved against
    /// `base_dir` when relative.
    pub async fn resolve_source(
        &self,
        set: &LabelSet,
        base_dir: &Path,
    ) -> Result<Vec<Label>, LabelError> {
        match set.source_type {
            LabelSourceKind::RemoteRepoLabels => {
                let repo_info = set.repo_info.as_ref().ok_or_else(|| {
                    LabelError::InvalidSource(format!(
                        "label set '{}' is json_url but has no repo_info",
                        set.id
                    ))
                })?;
                self.fetch_labels(&repo_info.owner, &repo_info.repo).await
            }
            LabelSourceKind::LocalFile => {
                let source_path = set.source_path.as_ref().ok_or_else(|| {
                    LabelError::InvalidSource(format!(
                        "label set '{}' is json_file but has no source_path",
                        set.id
                    ))
                })?;
                load_local_labels(base_dir, source_path)
            }
        }
    }
}

/// The step sequence of one full replacement: delete everything present,
/// then create everything desired.
///
/// Each step is idempotent against the live repository (delete-if-present,
/// create-if-absent), so replaying the plan, even raced by another writer,
/// still converges on exactly the desired set.
pub fn replace_plan(current: &[Label], desired: &[Label]) -> Vec<(LabelOp, Label)> {
    current
        .iter()
        .map(|label| (LabelOp::Delete, label.clone()))
        .chain(desired.iter().map(|label| (LabelOp::Create, label.clone())))
        .collect()
}

/// Reads and parses a local JSON label file, failing when the document is
/// not an array.
pub fn load_local_labels(base_dir: &Path, source_path: &str) -> Result<Vec<Label>, LabelError> {
    let path = if Path::new(source_path).is_absolute() {
        Path::new(source_path).to_path_buf()
    } else {
        base_dir.join(source_path)
    };

    let content = fs::read_to_string(&path).map_err(|e| {
        LabelError::FileError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let value: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| LabelError::FileError(format!("Failed to parse {}: {}", path.display(), e)))?;

    if !value.is_array() {
        return Err(LabelError::NotAnArray(path.display().to_string()));
    }

    serde_json::from_value(value)
        .map_err(|e| LabelError::FileError(format!("Invalid label entry in {}: {}", path.display(), e)))
}
