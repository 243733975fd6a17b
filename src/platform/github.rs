//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{ChangedFile, FileStatus, Platform, PlatformConfig, PullRequestDetails};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Page size for the changed-files listing.
const FILES_PER_PAGE: usize = 100;

/// One entry from the `/pulls/{n}/files` endpoint.
#[derive(Deserialize)]
struct DiffEntry {
    filename: String,
    status: String,
}

/// GitHub service using octocrab
///
/// PR get/update goes through octocrab; the changed-files listing uses a
/// raw HTTP request because octocrab's coverage of that endpoint is thin.
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
    /// Token for raw HTTP requests (changed-files listing)
    token: String,
    /// HTTP client for raw requests
    http_client: Client,
    /// API host for raw requests
    api_host: String,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        let api_host = if let Some(ref h) = host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
            format!("{h}/api/v3")
        } else {
            "api.github.com".to_string()
        };

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("bundle-impact")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: PlatformConfig {
                platform: Platform::GitHub,
                owner,
                repo,
                host,
            },
            token: token.to_string(),
            http_client,
            api_host,
        })
    }

    /// Fetch one page of the changed-files listing.
    async fn fetch_files_page(&self, pr_number: u64, page: usize) -> Result<Vec<DiffEntry>> {
        let url = format!(
            "https://{}/repos/{}/{}/pulls/{}/files?per_page={}&page={}",
            self.api_host, self.config.owner, self.config.repo, pr_number, FILES_PER_PAGE, page
        );

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch changed files: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::GitHubApi(format!(
                "changed files listing returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse changed files: {e}")))
    }
}

/// Map GitHub's file status strings to our `FileStatus`.
fn status_from_github(status: &str) -> FileStatus {
    match status {
        "added" | "copied" => FileStatus::Added,
        "removed" => FileStatus::Deleted,
        "renamed" => FileStatus::Renamed,
        // "modified", "changed", and anything GitHub adds later
        _ => FileStatus::Modified,
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails> {
        debug!(pr_number, "getting PR details");

        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .get(pr_number)
            .await?;

        let details = PullRequestDetails {
            number: pr.number,
            title: pr.title.clone().unwrap_or_default(),
            body: pr.body.clone(),
            head_ref: pr.head.ref_field.clone(),
            base_ref: pr.base.ref_field.clone(),
            html_url: pr
                .html_url
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        };

        debug!(pr_number, has_body = details.body.is_some(), "got PR details");
        Ok(details)
    }

    async fn set_pr_description(&self, pr_number: u64, description: &str) -> Result<()> {
        debug!(pr_number, bytes = description.len(), "updating PR description");
        self.client
            .pulls(&self.config.owner, &self.config.repo)
            .update(pr_number)
            .body(description)
            .send()
            .await?;
        debug!(pr_number, "updated PR description");
        Ok(())
    }

    async fn list_changed_files(&self, pr_number: u64) -> Result<Vec<ChangedFile>> {
        debug!(pr_number, "listing changed files");

        let mut files = Vec::new();
        let mut page = 1;
        loop {
            let entries = self.fetch_files_page(pr_number, page).await?;
            let last_page = entries.len() < FILES_PER_PAGE;

            files.extend(entries.into_iter().map(|e| ChangedFile {
                status: status_from_github(&e.status),
                path: e.filename,
            }));

            if last_page {
                break;
            }
            page += 1;
        }

        debug!(pr_number, count = files.len(), "listed changed files");
        Ok(files)
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
