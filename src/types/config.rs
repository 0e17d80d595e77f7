use serde::{Deserialize, Serialize};

/// Reference to a remote GitHub repository at a specific branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoInfo {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl RepoInfo {
    /// Returns the `owner/repo` slug used in messages and API paths.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// One remote-path-to-local-path copy instruction within a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMapping {
    pub remote_path: String,
    pub local_path: String,
}

/// A named set of template or hook files hosted in one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSet {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub repo_info: RepoInfo,
    pub files: Vec<FileMapping>,
}

/// Where a label set's definitions come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelSourceKind {
    /// The existing labels of a remote repository.
    #[serde(rename = "json_url")]
    RemoteRepoLabels,
    /// A local JSON file shipped with the catalog.
    #[serde(rename = "json_file")]
    LocalFile,
}

/// A named label set, sourced either from a remote repo or a local file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub source_type: LabelSourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_info: Option<RepoInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
}

/// The whole `template-sources.json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSources {
    #[serde(default)]
    pub templates: Vec<TemplateSet>,
    #[serde(default)]
    pub hooks: Vec<TemplateSet>,
    #[serde(default)]
    pub labels: Vec<LabelSet>,
}

impl TemplateSources {
    /// True when no category has any configured set.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() && self.hooks.is_empty() && self.labels.is_empty()
    }
}
