//! Shared test fixtures

#![allow(dead_code)]

pub mod mock_platform;

pub use mock_platform::{FixedReportProducer, MockPlatformService, RecordingNotifier};

use bundle_impact::types::{Platform, PlatformConfig};

/// A GitHub platform config pointing at the repo used across tests.
pub fn github_config() -> PlatformConfig {
    PlatformConfig {
        platform: Platform::GitHub,
        owner: "radashi-org".to_string(),
        repo: "radashi".to_string(),
        host: None,
    }
}

/// The table body used by the scenario tests (first run).
pub const REPORT_V1: &str = "| Status | File | Size | Difference (%) |\n\
                             | --- | --- | --- | --- |\n\
                             | M | src/foo/bar.ts | 110 | +10 (+10%) |";

/// The table body used by the scenario tests (second run).
pub const REPORT_V2: &str = "| Status | File | Size | Difference (%) |\n\
                             | --- | --- | --- | --- |\n\
                             | M | src/foo/bar.ts | 120 | +20 (+20%) |";

/// The summary-only description the scenario tests start from.
pub const SUMMARY_ONLY: &str = "## Summary\n\nThis is a summary of the PR.";
