use std::fmt;

// === ConfigError ===

/// Errors related to loading the template source catalog.
#[derive(Debug)]
pub enum ConfigError {
    /// The catalog file could not be read.
    IoError(String),
    /// The catalog file is not valid JSON of the expected shape.
    ParseError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// === AuthError ===

/// Errors related to GitHub authentication and token storage.
#[derive(Debug)]
pub enum AuthError {
    /// GITHUB_CLIENT_ID or GITHUB_CLIENT_SECRET is not set.
    MissingCredentials,
    /// The callback arrived without an authorization code.
    NoAuthorizationCode,
    /// GitHub rejected the code-for-token exchange.
    ExchangeRejected(String),
    /// The local callback listener could not be started or failed.
    ListenerError(String),
    /// A network error occurred while talking to GitHub.
    NetworkError(String),
    /// The login flow expired before the browser round-trip completed.
    Timeout(u64),
    /// Reading or writing the token file failed.
    TokenFileError(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingCredentials => write!(
                f,
                "GITHUB_CLIENT_ID or GITHUB_CLIENT_SECRET environment variables are not set"
            ),
            AuthError::NoAuthorizationCode => {
                write!(f, "No authorization code received")
            }
            AuthError::ExchangeRejected(msg) => {
                write!(f, "Token exchange rejected: {}", msg)
            }
            AuthError::ListenerError(msg) => {
                write!(f, "Local callback listener error: {}", msg)
            }
            AuthError::NetworkError(msg) => write!(f, "Auth network error: {}", msg),
            AuthError::Timeout(secs) => {
                write!(f, "Login timed out after {} seconds", secs)
            }
            AuthError::TokenFileError(msg) => write!(f, "Token file error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

// === FetchError ===

/// Errors related to fetching remote repository content.
#[derive(Debug)]
pub enum FetchError {
    /// The remote path does not exist on the given branch.
    NotFound { path: String, branch: String },
    /// The remote path resolved to a directory or other non-file content.
    NotAFile { path: String, content_type: String },
    /// The transport payload could not be decoded.
    DecodeError(String),
    /// A network error occurred while fetching.
    NetworkError(String),
    /// The GitHub API returned an unexpected error.
    ApiError(String),
    /// Writing the fetched file locally failed.
    FileSystemError(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound { path, branch } => write!(
                f,
                "Remote path '{}' not found on branch '{}'",
                path, branch
            ),
            FetchError::NotAFile { path, content_type } => write!(
                f,
                "Remote path '{}' is a {}, not a file",
                path, content_type
            ),
            FetchError::DecodeError(msg) => write!(f, "Content decode error: {}", msg),
            FetchError::NetworkError(msg) => write!(f, "Fetch network error: {}", msg),
            FetchError::ApiError(msg) => write!(f, "GitHub API error: {}", msg),
            FetchError::FileSystemError(msg) => {
                write!(f, "Fetch file system error: {}", msg)
            }
        }
    }
}

impl std::error::Error for FetchError {}

// === LabelError ===

/// Errors related to GitHub label operations.
#[derive(Debug)]
pub enum LabelError {
    /// The label source repository or target repository was not found.
    RepoNotFound(String),
    /// The local label file could not be read.
    FileError(String),
    /// The local label file did not contain a JSON array of labels.
    NotAnArray(String),
    /// A network error occurred while talking to GitHub.
    NetworkError(String),
    /// The GitHub API returned an unexpected error.
    ApiError(String),
    /// The label set configuration mixes or omits source fields.
    InvalidSource(String),
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::RepoNotFound(repo) => write!(f, "Repository not found: {}", repo),
            LabelError::FileError(msg) => write!(f, "Label file error: {}", msg),
            LabelError::NotAnArray(path) => {
                write!(f, "Label file content is not a valid array: {}", path)
            }
            LabelError::NetworkError(msg) => write!(f, "Label network error: {}", msg),
            LabelError::ApiError(msg) => write!(f, "Label API error: {}", msg),
            LabelError::InvalidSource(msg) => write!(f, "Invalid label source: {}", msg),
        }
    }
}

impl std::error::Error for LabelError {}

// === GitError ===

/// Errors related to local Git subprocess invocations.
#[derive(Debug)]
pub enum GitError {
    /// The git binary could not be executed.
    SpawnError(String),
    /// The git command exited with a failure status.
    CommandFailed { command: String, stderr: String },
    /// Adjusting hook file permissions failed.
    PermissionError(String),
}

impl fmt::Display for GitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitError::SpawnError(msg) => write!(f, "Failed to run git: {}", msg),
            GitError::CommandFailed { command, stderr } => {
                write!(f, "git {} failed: {}", command, stderr)
            }
            GitError::PermissionError(msg) => {
                write!(f, "Hook permission error: {}", msg)
            }
        }
    }
}

impl std::error::Error for GitError {}
