//! Plain-text batch report.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Local};

use super::BatchReport;
use crate::error::{Result, ResultExt};

const RULE: &str = "----------------------------------------";

/// Render the report: a summary header, then one line per failed file.
pub fn render_report(base_path: &Path, report: &BatchReport, created: &DateTime<Local>) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Music Video NFO Report");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Created at: {}", created.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "Base path: {}", base_path.display());
    let _ = writeln!(out, "Total files processed: {}", report.total);
    let _ = writeln!(out, "Written: {}", report.written);
    if report.resolved > 0 {
        let _ = writeln!(out, "Resolved (dry run): {}", report.resolved);
    }
    let _ = writeln!(out, "Skipped (existing NFO): {}", report.skipped);
    let _ = writeln!(out, "Not found: {}", report.failed_count());
    let _ = writeln!(out, "{RULE}");

    for failed in &report.failed {
        let _ = writeln!(out, "{}: {}", failed.name, failed.reason);
    }

    out
}

/// Write the report to `path`, replacing any previous one.
pub fn write_report(path: &Path, base_path: &Path, report: &BatchReport) -> Result<()> {
    let contents = render_report(base_path, report, &Local::now());
    std::fs::write(path, contents)
        .with_context(format!("Failed to write report {}", path.display()))?;
    tracing::info!("Report saved to {:?}", path);
    Ok(())
}
