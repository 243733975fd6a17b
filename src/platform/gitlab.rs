//! GitLab platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{ChangedFile, FileStatus, Platform, PlatformConfig, PullRequestDetails};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// MR details from the merge request endpoint.
#[derive(Deserialize)]
struct MergeRequestDetails {
    iid: u64,
    title: String,
    description: Option<String>,
    web_url: String,
    source_branch: String,
    target_branch: String,
}

/// Response from the `/changes` endpoint.
#[derive(Deserialize)]
struct MrChanges {
    changes: Vec<MrChange>,
}

/// One changed file as reported by GitLab.
#[derive(Deserialize)]
struct MrChange {
    new_path: String,
    #[serde(default)]
    new_file: bool,
    #[serde(default)]
    deleted_file: bool,
    #[serde(default)]
    renamed_file: bool,
}

impl MrChange {
    fn status(&self) -> FileStatus {
        if self.new_file {
            FileStatus::Added
        } else if self.deleted_file {
            FileStatus::Deleted
        } else if self.renamed_file {
            FileStatus::Renamed
        } else {
            FileStatus::Modified
        }
    }
}

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GitLab service using reqwest
pub struct GitLabService {
    client: Client,
    token: String,
    host: String,
    config: PlatformConfig,
    project_path: String,
}

impl GitLabService {
    /// Create a new GitLab service
    ///
    /// `host` may carry an explicit `http://`/`https://` scheme (used by
    /// tests against local servers); a bare host gets `https://`.
    pub fn new(token: String, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let host = host.unwrap_or_else(|| "gitlab.com".to_string());
        let project_path = format!("{owner}/{repo}");

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::GitLabApi(format!("failed to create HTTP client: {e}")))?;

        let config_host = if host == "gitlab.com" {
            None
        } else {
            Some(host.clone())
        };

        Ok(Self {
            client,
            token,
            host,
            config: PlatformConfig {
                platform: Platform::GitLab,
                owner,
                repo,
                host: config_host,
            },
            project_path,
        })
    }

    fn api_url(&self, path: &str) -> String {
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            format!("{}/api/v4{path}", self.host)
        } else {
            format!("https://{}/api/v4{path}", self.host)
        }
    }

    fn encoded_project(&self) -> String {
        urlencoding::encode(&self.project_path).into_owned()
    }
}

#[async_trait]
impl PlatformService for GitLabService {
    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails> {
        debug!(mr_iid = pr_number, "getting MR details");

        let url = self.api_url(&format!(
            "/projects/{}/merge_requests/{}",
            self.encoded_project(),
            pr_number
        ));

        let mr: MergeRequestDetails = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?
            .json()
            .await?;

        let details = PullRequestDetails {
            number: mr.iid,
            title: mr.title,
            body: mr.description,
            head_ref: mr.source_branch,
            base_ref: mr.target_branch,
            html_url: mr.web_url,
        };

        debug!(mr_iid = pr_number, has_body = details.body.is_some(), "got MR details");
        Ok(details)
    }

    async fn set_pr_description(&self, pr_number: u64, description: &str) -> Result<()> {
        debug!(mr_iid = pr_number, bytes = description.len(), "updating MR description");

        let url = self.api_url(&format!(
            "/projects/{}/merge_requests/{}",
            self.encoded_project(),
            pr_number
        ));

        self.client
            .put(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .json(&serde_json::json!({ "description": description }))
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?;

        debug!(mr_iid = pr_number, "updated MR description");
        Ok(())
    }

    async fn list_changed_files(&self, pr_number: u64) -> Result<Vec<ChangedFile>> {
        debug!(mr_iid = pr_number, "listing changed files");

        let url = self.api_url(&format!(
            "/projects/{}/merge_requests/{}/changes",
            self.encoded_project(),
            pr_number
        ));

        let changes: MrChanges = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?
            .json()
            .await?;

        let files: Vec<ChangedFile> = changes
            .changes
            .into_iter()
            .map(|c| ChangedFile {
                status: c.status(),
                path: c.new_path,
            })
            .collect();

        debug!(mr_iid = pr_number, count = files.len(), "listed changed files");
        Ok(files)
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
