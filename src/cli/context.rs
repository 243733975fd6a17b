//! Shared command context for CLI commands
//!
//! Performs the setup shared by update runs: loading configuration,
//! resolving the token, and creating the platform service and reporter.

use crate::cli::UpdateArgs;
use bundle_impact::auth::resolve_token;
use bundle_impact::config::load_config;
use bundle_impact::error::Result;
use bundle_impact::platform::{PlatformService, create_platform_service, detect_platform, parse_repo_slug};
use bundle_impact::report::{SizeReporter, WeighOptions};
use bundle_impact::types::Platform;

/// Shared context for commands that talk to the platform
pub struct CommandContext {
    /// Platform service (GitHub/GitLab)
    pub platform: Box<dyn PlatformService>,
    /// Report producer weighing the two checkouts
    pub reporter: SizeReporter,
}

impl CommandContext {
    /// Create a new command context from update arguments
    ///
    /// Configuration is read from the head checkout (that is the repository
    /// being built); CLI flags override file values.
    pub fn new(args: &UpdateArgs) -> Result<Self> {
        let config = load_config(&args.head_dir)?;

        let host = args.host.clone().or_else(|| config.platform.host.clone());
        let platform_kind = detect_platform(
            args.gitlab.then_some(Platform::GitLab),
            host.as_deref(),
        );
        let platform_config = parse_repo_slug(&args.repo, platform_kind, host)?;

        let auth = resolve_token(platform_kind, args.token.clone())?;
        let platform = create_platform_service(&platform_config, &auth.token)?;

        let reporter = SizeReporter::new(
            args.base_dir.clone(),
            args.head_dir.clone(),
            WeighOptions {
                include_unchanged: config.report.include_unchanged,
                extensions: config.report.extensions.clone(),
            },
        );

        Ok(Self { platform, reporter })
    }
}
