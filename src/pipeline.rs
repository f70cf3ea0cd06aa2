//! Parse, filter, aggregate and assemble in one pass.

use tracing::info;

use crate::aggregate::aggregate_table;
use crate::criteria::LaunchCriteria;
use crate::error::PipelineError;
use crate::filter::apply_criteria;
use crate::report::{ReportTable, assemble};
use crate::table::{ForecastTable, parse_table};

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct LaunchReport {
    pub forecast: ForecastTable,
    pub qualifying: ForecastTable,
    pub report: ReportTable,
}

impl LaunchReport {
    pub fn qualifying_days(&self) -> Vec<String> {
        self.qualifying.rows.iter().map(|r| r.day.clone()).collect()
    }
}

/// Runs the whole pipeline over raw forecast text.
///
/// # Errors
///
/// Parsing errors are returned before any filtering happens, and
/// [`PipelineError::EmptyResultSet`] when no day qualifies.
pub fn run(bytes: &[u8], criteria: &LaunchCriteria) -> Result<LaunchReport, PipelineError> {
    let forecast = parse_table(bytes)?;
    run_table(forecast, criteria)
}

/// Same as [`run`] for an already parsed table.
pub fn run_table(forecast: ForecastTable, criteria: &LaunchCriteria) -> Result<LaunchReport, PipelineError> {
    let qualifying = apply_criteria(&forecast, criteria);
    info!(
        rows = forecast.len(),
        qualifying = qualifying.len(),
        "Launch criteria applied"
    );

    let aggregates = aggregate_table(&qualifying)?;
    let report = assemble(aggregates);

    Ok(LaunchReport {
        forecast,
        qualifying,
        report,
    })
}
