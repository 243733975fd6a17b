//! Command-line interface for bundle-impact

pub mod context;
pub mod style;
pub mod update;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition
#[derive(Parser, Debug)]
#[command(
    name = "bundle-impact",
    version,
    about = "Maintain a Bundle impact section in PR descriptions"
)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Update the PR description with the latest bundle impact report
    Update(UpdateArgs),
}

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Repository slug, e.g. owner/repo
    #[arg(long)]
    pub repo: String,

    /// Pull request / merge request number
    #[arg(long)]
    pub pr: u64,

    /// Directory containing the base revision checkout
    #[arg(long, default_value = "base")]
    pub base_dir: PathBuf,

    /// Directory containing the head revision checkout
    #[arg(long, default_value = ".")]
    pub head_dir: PathBuf,

    /// Custom API host (GitHub Enterprise / self-hosted GitLab)
    #[arg(long)]
    pub host: Option<String>,

    /// Talk to GitLab instead of GitHub
    #[arg(long)]
    pub gitlab: bool,

    /// API token (falls back to GITHUB_TOKEN/GH_TOKEN or GITLAB_TOKEN/CI_JOB_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Compute and print the merged description without writing it back
    #[arg(long)]
    pub dry_run: bool,
}
