//! Output formatting and persistence for launch reports.
//!
//! Supports pretty-printing, JSON serialization, and writing the CSV artifact.

use anyhow::Result;
use tracing::{debug, info};

use crate::report::{ReportSummary, ReportTable};
use std::fs::File;
use std::io::Write;

/// Logs the report using Rust's debug pretty-print format.
pub fn print_pretty(report: &ReportTable) {
    debug!("{:#?}", report);
}

/// Logs a report summary as pretty-printed JSON.
pub fn print_json(summary: &ReportSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Writes the report as CSV to `path`, replacing any existing file.
///
/// The file is flushed and synced before returning, so a successful return
/// means the artifact is complete on disk.
pub fn write_report(path: &str, report: &ReportTable) -> Result<()> {
    debug!(path, rows = report.rows.len(), "Writing report");

    let csv = report.to_csv()?;

    let mut file = File::create(path)?;
    file.write_all(csv.as_bytes())?;
    file.flush()?;
    file.sync_all()?;

    Ok(())
}
