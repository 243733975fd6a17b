//! Weigh changed files by byte size across two checkouts.
//!
//! CI checks out the PR base and head into separate directories; the
//! reporter stats each changed file in both trees and tabulates the size
//! difference. Files missing from a tree (added/deleted files) weigh zero
//! on that side.

use crate::error::Result;
use crate::report::{ReportProducer, SizeRow, render_report};
use crate::types::ChangedFile;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options controlling which rows make it into the report.
#[derive(Debug, Clone, Default)]
pub struct WeighOptions {
    /// Include files whose size did not change
    pub include_unchanged: bool,
    /// When non-empty, only weigh files with one of these extensions
    pub extensions: Vec<String>,
}

/// [`ReportProducer`] that compares file sizes between a base and a head
/// checkout directory.
pub struct SizeReporter {
    base_dir: PathBuf,
    head_dir: PathBuf,
    options: WeighOptions,
}

impl SizeReporter {
    /// Create a reporter over the two checkout directories.
    pub fn new(base_dir: impl Into<PathBuf>, head_dir: impl Into<PathBuf>, options: WeighOptions) -> Self {
        Self {
            base_dir: base_dir.into(),
            head_dir: head_dir.into(),
            options,
        }
    }

    /// Whether a changed file passes the extension filter.
    fn is_weighable(&self, path: &str) -> bool {
        if self.options.extensions.is_empty() {
            return true;
        }
        Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.options.extensions.iter().any(|want| want == ext))
    }

    /// Weigh one changed file, returning None when it produces no row.
    fn weigh(&self, file: &ChangedFile) -> Option<SizeRow> {
        if !self.is_weighable(&file.path) {
            return None;
        }

        let base = file_size(&self.base_dir, &file.path);
        let head = file_size(&self.head_dir, &file.path);
        if base.is_none() && head.is_none() {
            debug!(path = %file.path, "file absent from both checkouts, skipping");
            return None;
        }

        let size = head.unwrap_or(0);
        let delta = size as i64 - base.unwrap_or(0) as i64;
        if delta == 0 && !self.options.include_unchanged {
            return None;
        }

        Some(SizeRow {
            status: file.status,
            path: file.path.clone(),
            size,
            delta,
        })
    }
}

#[async_trait]
impl ReportProducer for SizeReporter {
    async fn produce(&self, changed_files: &[ChangedFile]) -> Result<String> {
        let rows: Vec<SizeRow> = changed_files.iter().filter_map(|f| self.weigh(f)).collect();
        debug!(
            changed = changed_files.len(),
            rows = rows.len(),
            "weighed changed files"
        );
        Ok(render_report(&rows))
    }
}

/// Size in bytes of `path` under `dir`, or None when it is not a regular file.
fn file_size(dir: &Path, path: &str) -> Option<u64> {
    fs::metadata(dir.join(path))
        .ok()
        .filter(fs::Metadata::is_file)
        .map(|m| m.len())
}
