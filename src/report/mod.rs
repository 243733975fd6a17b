//! Bundle impact report production.
//!
//! The orchestrator only depends on [`ReportProducer`], which turns the
//! PR's changed files into an opaque Markdown string. The shipped producer
//! is [`SizeReporter`], which weighs files by byte size across two
//! checkouts. The report body is never parsed downstream; the section
//! merger embeds it verbatim.

mod weigh;

pub use weigh::{SizeReporter, WeighOptions};

use crate::error::Result;
use crate::types::{ChangedFile, FileStatus};
use async_trait::async_trait;

/// Produces the bundle impact report body for a set of changed files.
#[async_trait]
pub trait ReportProducer: Send + Sync {
    /// Produce the report body. May be empty when there is nothing to report.
    async fn produce(&self, changed_files: &[ChangedFile]) -> Result<String>;
}

/// One row of the size report table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeRow {
    /// Change status of the file
    pub status: FileStatus,
    /// Path relative to the repository root
    pub path: String,
    /// Size in bytes at the head revision
    pub size: u64,
    /// Head size minus base size, in bytes
    pub delta: i64,
}

impl SizeRow {
    /// Size in bytes at the base revision.
    const fn base_size(&self) -> i64 {
        self.size as i64 - self.delta
    }
}

/// Render rows as the Markdown table embedded in the PR description.
///
/// Returns an empty string for an empty row set; the section merger still
/// emits the section in that case, just with an empty body.
pub fn render_report(rows: &[SizeRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut out = String::from("| Status | File | Size | Difference (%) |\n| --- | --- | --- | --- |");
    for row in rows {
        out.push('\n');
        out.push_str(&format!(
            "| {} | {} | {} | {} |",
            row.status,
            row.path,
            row.size,
            format_difference(row)
        ));
    }
    out
}

/// Format the difference cell: `+10 (+10%)`, `-5 (-50%)`, or `+110 (new)`
/// for files with no base-revision size to compare against.
fn format_difference(row: &SizeRow) -> String {
    let base = row.base_size();
    if base <= 0 {
        return format!("{:+} (new)", row.delta);
    }
    let percent = row.delta * 100 / base;
    format!("{:+} ({:+}%)", row.delta, percent)
}
