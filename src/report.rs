//! Final report table and its CSV rendering.

use chrono::{DateTime, Utc};
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;

use crate::aggregate::AggregateRow;
use crate::error::PipelineError;

/// Column names of the report, in output order.
pub const REPORT_HEADER: [&str; 6] = ["Parameter", "Average", "Max", "Min", "Median", "Launch Day"];

/// Aggregate rows in column order, rendered under [`REPORT_HEADER`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub rows: Vec<AggregateRow>,
}

/// Wraps aggregate rows into a report. No I/O happens here.
pub fn assemble(rows: Vec<AggregateRow>) -> ReportTable {
    ReportTable { rows }
}

impl ReportTable {
    /// Text fields of each line, header first. Average and median carry two
    /// decimals, max and min are plain integers.
    pub fn records(&self) -> Vec<Vec<String>> {
        let mut records = Vec::with_capacity(self.rows.len() + 1);
        records.push(REPORT_HEADER.iter().map(|h| h.to_string()).collect());

        for row in &self.rows {
            records.push(vec![
                row.parameter.clone(),
                format!("{:.2}", row.average),
                row.max.to_string(),
                row.min.to_string(),
                format!("{:.2}", row.median),
                row.launch_day.clone(),
            ]);
        }

        records
    }

    /// Serializes the report as CSV text, one line per record.
    ///
    /// Fields are joined with commas as-is; nothing is quoted or escaped.
    pub fn to_csv(&self) -> Result<String, PipelineError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(Vec::new());

        for record in self.records() {
            writer.write_record(&record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| PipelineError::Csv(e.into_error().into()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// JSON view of a finished run.
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub generated_at: DateTime<Utc>,
    pub qualifying_days: Vec<String>,
    pub parameters: Vec<AggregateRow>,
}
