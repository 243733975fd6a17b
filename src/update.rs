//! The update orchestrator: fetch, produce, merge, write back.
//!
//! One pull-request update event means one strictly sequential run: read
//! the current description, obtain a report body, upsert the section, and
//! write the result back. Progress is emitted through a [`Notifier`]; any
//! stage failure is surfaced exactly once and nothing partial is written.
//! There are no retries - the merge is idempotent, so the host platform can
//! simply re-invoke the run.

use crate::error::Result;
use crate::platform::PlatformService;
use crate::report::ReportProducer;
use crate::section::upsert_bundle_impact;
use async_trait::async_trait;
use tracing::debug;

/// Ordered progress messages and a failure channel for one run.
///
/// `info` is called for each sequential progress message; `set_failed` is
/// called at most once per run, with a descriptive message, after which no
/// further writes are attempted.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Emit a progress message
    async fn info(&self, message: &str);

    /// Report the run as failed
    async fn set_failed(&self, message: &str);
}

/// Options for a single update run.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Compute the merged description but do not write it back
    pub dry_run: bool,
}

/// Outcome of a successful update run.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    /// PR/MR number that was updated
    pub pr_number: u64,
    /// Web URL of the PR/MR
    pub html_url: String,
    /// The full merged description
    pub new_description: String,
    /// Whether the write-back was skipped (dry run)
    pub skipped_write: bool,
}

/// Update the bundle impact section of a PR description.
///
/// On failure the notifier's failure channel is invoked once with the
/// error's display text and the error is returned; the description is
/// never partially written.
pub async fn update_bundle_impact(
    platform: &dyn PlatformService,
    producer: &dyn ReportProducer,
    notifier: &dyn Notifier,
    pr_number: u64,
    options: &UpdateOptions,
) -> Result<UpdateOutcome> {
    match run(platform, producer, notifier, pr_number, options).await {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            notifier.set_failed(&e.to_string()).await;
            Err(e)
        }
    }
}

async fn run(
    platform: &dyn PlatformService,
    producer: &dyn ReportProducer,
    notifier: &dyn Notifier,
    pr_number: u64,
    options: &UpdateOptions,
) -> Result<UpdateOutcome> {
    let config = platform.config();

    notifier
        .info(&format!(
            "fetching PR #{pr_number} data from {}/{}...",
            config.owner, config.repo
        ))
        .await;
    let details = platform.get_pr_details(pr_number).await?;
    let changed_files = platform.list_changed_files(pr_number).await?;

    notifier.info("calculating bundle impact...").await;
    let report_body = producer.produce(&changed_files).await?;
    debug!(pr_number, report_bytes = report_body.len(), "produced report");

    let description = details.body.unwrap_or_default();
    let new_description = upsert_bundle_impact(&description, &report_body);

    if options.dry_run {
        notifier.info("dry run - skipping PR description update.").await;
        return Ok(UpdateOutcome {
            pr_number,
            html_url: details.html_url,
            new_description,
            skipped_write: true,
        });
    }

    notifier.info("updating PR description...").await;
    platform.set_pr_description(pr_number, &new_description).await?;

    notifier
        .info("PR description updated with bundle impact.")
        .await;

    Ok(UpdateOutcome {
        pr_number,
        html_url: details.html_url,
        new_description,
        skipped_write: false,
    })
}
