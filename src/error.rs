//! Error types raised by the filtering and aggregation pipeline.

use thiserror::Error;

/// Failures the pipeline surfaces to its caller.
///
/// Every variant aborts the run: no partial report is produced.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The forecast input had no header line.
    #[error("forecast table has no header row")]
    MissingHeader,

    /// A line has the wrong number of fields or a numeric field is not an integer.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// No forecast day satisfied every launch criterion.
    #[error("no forecast day satisfies the launch criteria")]
    EmptyResultSet,

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl PipelineError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        PipelineError::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}
