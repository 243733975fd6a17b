//! Update command - refresh the bundle impact section on a PR

use crate::cli::UpdateArgs;
use crate::cli::context::CommandContext;
use crate::cli::style::{Stylize, check};
use anstream::println;
use async_trait::async_trait;
use bundle_impact::error::Result;
use bundle_impact::update::{Notifier, UpdateOptions, update_bundle_impact};

/// Notifier that prints progress to the terminal.
///
/// Under GitHub Actions the failure message is additionally emitted as an
/// `::error::` workflow command so the run gets a failure annotation; the
/// error itself is printed by `main` for every environment.
pub struct CliNotifier;

#[async_trait]
impl Notifier for CliNotifier {
    async fn info(&self, message: &str) {
        println!("{}", message.muted());
    }

    async fn set_failed(&self, message: &str) {
        if std::env::var_os("GITHUB_ACTIONS").is_some() {
            println!("::error::{message}");
        }
    }
}

/// Run the update command
pub async fn run_update(args: UpdateArgs) -> Result<()> {
    let ctx = CommandContext::new(&args)?;
    let notifier = CliNotifier;
    let options = UpdateOptions {
        dry_run: args.dry_run,
    };

    let outcome = update_bundle_impact(
        ctx.platform.as_ref(),
        &ctx.reporter,
        &notifier,
        args.pr,
        &options,
    )
    .await?;

    if outcome.skipped_write {
        println!();
        println!("{}", outcome.new_description);
    } else {
        println!(
            "{} {} {}",
            check(),
            "Updated".success(),
            outcome.html_url.accent()
        );
    }

    Ok(())
}
