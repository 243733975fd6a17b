//! Token resolution for GitHub and GitLab
//!
//! Supports an explicit flag and environment variables; no interactive
//! auth, since the tool runs inside CI jobs.

use crate::error::{Error, Result};
use crate::types::Platform;

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token passed explicitly (CLI flag)
    Flag,
    /// Token from environment variable
    EnvVar,
}

/// A resolved authentication token
#[derive(Debug, Clone)]
pub struct AuthToken {
    /// The token value
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

/// Environment variables consulted per platform, in priority order.
const GITHUB_ENV_VARS: &[&str] = &["GITHUB_TOKEN", "GH_TOKEN"];
const GITLAB_ENV_VARS: &[&str] = &["GITLAB_TOKEN", "CI_JOB_TOKEN"];

/// Resolve a token for the platform.
///
/// An explicit flag value wins; otherwise the platform's environment
/// variables are consulted in order. A missing token is a configuration
/// error surfaced before any network call.
pub fn resolve_token(platform: Platform, flag: Option<String>) -> Result<AuthToken> {
    if let Some(token) = flag.filter(|t| !t.is_empty()) {
        return Ok(AuthToken {
            token,
            source: AuthSource::Flag,
        });
    }

    let vars = match platform {
        Platform::GitHub => GITHUB_ENV_VARS,
        Platform::GitLab => GITLAB_ENV_VARS,
    };

    for var in vars {
        if let Ok(token) = std::env::var(var)
            && !token.is_empty()
        {
            return Ok(AuthToken {
                token,
                source: AuthSource::EnvVar,
            });
        }
    }

    Err(Error::Auth(format!(
        "no {platform} token found; pass --token or set {}",
        vars.join(" or ")
    )))
}
