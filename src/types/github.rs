use serde::{Deserialize, Serialize};

/// One entry of a `GET /repos/{owner}/{repo}/contents/{path}` response.
///
/// For a regular file the `content` field carries the base64 payload and
/// `encoding` is `"base64"`. Directory listings come back as a JSON array of
/// these entries without content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

/// Result of a contents lookup: a single file or a directory listing.
#[derive(Debug, Clone)]
pub enum RemoteContent {
    File(ContentEntry),
    Directory(Vec<ContentEntry>),
}

/// Response of the OAuth code-for-token exchange.
///
/// GitHub answers 200 even for rejected codes, signalling failure through
/// the `error` fields instead of the status.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}
