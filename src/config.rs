//! Repository-local configuration from `.bundle-impact.toml`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Filename for repository-local configuration.
pub const CONFIG_FILE: &str = ".bundle-impact.toml";

/// Repository-local configuration.
///
/// Every field is optional; a missing file means defaults. CLI flags
/// override file values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Platform settings
    #[serde(default)]
    pub platform: PlatformSection,
    /// Report settings
    #[serde(default)]
    pub report: ReportSection,
}

/// `[platform]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformSection {
    /// Custom API host (GitHub Enterprise / self-hosted GitLab)
    pub host: Option<String>,
}

/// `[report]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSection {
    /// Include files whose size did not change
    #[serde(default)]
    pub include_unchanged: bool,
    /// When non-empty, only weigh files with one of these extensions
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Path to the configuration file under `root`.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Load configuration from disk.
///
/// Returns defaults if the file doesn't exist.
pub fn load_config(root: &Path) -> Result<Config> {
    let path = config_path(root);

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    Ok(config)
}
