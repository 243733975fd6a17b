//! Repository slug parsing and platform detection

use crate::error::{Error, Result};
use crate::types::{Platform, PlatformConfig};
use regex::Regex;

/// Parse an `owner/repo` slug into a platform configuration.
///
/// The slug format is shared by both platforms (GitLab subgroup paths are
/// not supported; the deepest group becomes the owner).
pub fn parse_repo_slug(slug: &str, platform: Platform, host: Option<String>) -> Result<PlatformConfig> {
    // Unwrap: pattern is a compile-time constant
    let re = Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$").unwrap();

    let caps = re
        .captures(slug)
        .ok_or_else(|| Error::Config(format!("invalid repository slug '{slug}', expected owner/repo")))?;

    Ok(PlatformConfig {
        platform,
        owner: caps[1].to_string(),
        repo: caps[2].to_string(),
        host,
    })
}

/// Decide which platform to talk to.
///
/// An explicit choice wins; otherwise a host containing "gitlab" selects
/// GitLab and everything else defaults to GitHub.
pub fn detect_platform(explicit: Option<Platform>, host: Option<&str>) -> Platform {
    if let Some(platform) = explicit {
        return platform;
    }
    match host {
        Some(h) if h.contains("gitlab") => Platform::GitLab,
        _ => Platform::GitHub,
    }
}
