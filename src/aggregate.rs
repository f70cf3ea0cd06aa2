//! Per-parameter summary statistics over the qualifying days.

use serde::Serialize;

use crate::error::PipelineError;
use crate::stats::{mean, median};
use crate::table::{ForecastTable, NUMERIC_COLUMNS};

/// Summary of one weather parameter across the qualifying days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub parameter: String,
    pub average: f64,
    pub max: i32,
    pub min: i32,
    pub median: f64,
    /// Reserved for marking the chosen launch day; always empty for now.
    pub launch_day: String,
}

/// Computes average, max, min and median for a single column.
///
/// # Errors
///
/// [`PipelineError::EmptyResultSet`] when `values` is empty.
pub fn aggregate_column(parameter: &str, values: &[i32]) -> Result<AggregateRow, PipelineError> {
    let (Some(&max), Some(&min)) = (values.iter().max(), values.iter().min()) else {
        return Err(PipelineError::EmptyResultSet);
    };

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let average = mean(values).ok_or(PipelineError::EmptyResultSet)?;
    let median = median(&sorted).ok_or(PipelineError::EmptyResultSet)?;

    Ok(AggregateRow {
        parameter: parameter.to_string(),
        average,
        max,
        min,
        median,
        launch_day: String::new(),
    })
}

/// Aggregates every numeric column of a filtered table, in column order.
///
/// Either all rows are produced or none: the first failure is returned.
pub fn aggregate_table(filtered: &ForecastTable) -> Result<Vec<AggregateRow>, PipelineError> {
    if filtered.is_empty() {
        return Err(PipelineError::EmptyResultSet);
    }

    NUMERIC_COLUMNS
        .map(|column| aggregate_column(filtered.parameter_name(column), &filtered.column_values(column)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse_table;

    #[test]
    fn test_aggregate_even_count() {
        let row = aggregate_column("Temperature", &[40, 10, 30, 20]).unwrap();
        assert_eq!(row.parameter, "Temperature");
        assert_eq!(row.average, 25.0);
        assert_eq!(row.max, 40);
        assert_eq!(row.min, 10);
        assert_eq!(row.median, 25.0);
        assert!(row.launch_day.is_empty());
    }

    #[test]
    fn test_aggregate_odd_count() {
        let row = aggregate_column("Wind", &[30, 10, 20]).unwrap();
        assert_eq!(row.average, 20.0);
        assert_eq!(row.max, 30);
        assert_eq!(row.min, 10);
        assert_eq!(row.median, 20.0);
    }

    #[test]
    fn test_aggregate_negative_values() {
        let row = aggregate_column("Temperature", &[-3, -1]).unwrap();
        assert_eq!(row.average, -2.0);
        assert_eq!(row.max, -1);
        assert_eq!(row.min, -3);
        assert_eq!(row.median, -2.0);
    }

    #[test]
    fn test_aggregate_empty_column() {
        let result = aggregate_column("Humidity", &[]);
        assert!(matches!(result, Err(PipelineError::EmptyResultSet)));
    }

    #[test]
    fn test_aggregate_table_numeric_columns_only() {
        let input = "Day,Temperature,Wind,Humidity,Precipitation,Lightning,Clouds\n\
                     1,15,10,50,0,no,clear\n\
                     2,25,20,70,0,no,clear\n";
        let table = parse_table(input.as_bytes()).unwrap();
        let rows = aggregate_table(&table).unwrap();

        let names: Vec<_> = rows.iter().map(|r| r.parameter.as_str()).collect();
        assert_eq!(names, vec!["Temperature", "Wind", "Humidity", "Precipitation"]);
        assert_eq!(rows[0].average, 20.0);
        assert_eq!(rows[2].median, 60.0);
        assert_eq!(rows[3].max, 0);
    }

    #[test]
    fn test_aggregate_table_empty() {
        let input = "Day,Temperature,Wind,Humidity,Precipitation,Lightning,Clouds\n";
        let table = parse_table(input.as_bytes()).unwrap();
        assert!(matches!(
            aggregate_table(&table),
            Err(PipelineError::EmptyResultSet)
        ));
    }
}
