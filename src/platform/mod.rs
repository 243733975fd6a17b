//! Platform services for GitHub and GitLab
//!
//! Provides a unified interface for the PR/MR description read-modify-write
//! cycle across platforms.

mod detection;
mod factory;
mod github;
mod gitlab;

pub use detection::{detect_platform, parse_repo_slug};
pub use factory::create_platform_service;
pub use github::GitHubService;
pub use gitlab::GitLabService;

use crate::error::Result;
use crate::types::{ChangedFile, PlatformConfig, PullRequestDetails};
use async_trait::async_trait;

/// Platform service trait for PR/MR description operations
///
/// This trait abstracts GitHub and GitLab operations, allowing the same
/// update logic to work with either platform. The description field is
/// treated as an external key/value store keyed by the PR number; each run
/// reads it fresh, transforms it once, and writes it back.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Get PR details including the current description body
    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails>;

    /// Replace the PR description with `description`
    async fn set_pr_description(&self, pr_number: u64, description: &str) -> Result<()>;

    /// List the files changed by the PR
    async fn list_changed_files(&self, pr_number: u64) -> Result<Vec<ChangedFile>>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
