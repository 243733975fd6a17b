//! Error types for bundle-impact

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by bundle-impact operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),

    /// No usable authentication token was found
    #[error("auth error: {0}")]
    Auth(String),

    /// Platform-agnostic service failure (used by mocks and the factory)
    #[error("platform error: {0}")]
    Platform(String),

    /// GitHub API failure
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// GitLab API failure
    #[error("GitLab API error: {0}")]
    GitLabApi(String),

    /// Report production failure
    #[error("report error: {0}")]
    Report(String),

    /// Filesystem error while weighing changed files
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// octocrab client error
    #[error("GitHub client error: {0}")]
    Octocrab(#[from] octocrab::Error),
}
