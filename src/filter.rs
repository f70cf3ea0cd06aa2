//! Selection of qualifying forecast days.

use tracing::debug;

use crate::criteria::{Criterion, LaunchCriteria};
use crate::table::ForecastTable;

/// Outcome of checking a single day against the launch criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayVerdict {
    pub day: String,
    pub qualifies: bool,
    pub violations: Vec<Criterion>,
}

/// Returns a table with the same header holding only the rows that pass
/// every criterion, in their original order.
///
/// An empty result is not an error here; aggregation decides what to do with it.
pub fn apply_criteria(table: &ForecastTable, criteria: &LaunchCriteria) -> ForecastTable {
    let rows = table
        .rows
        .iter()
        .filter(|row| {
            let ok = criteria.accepts(row);
            if !ok {
                debug!(day = %row.day, violations = ?criteria.violations(row), "Day rejected");
            }
            ok
        })
        .cloned()
        .collect();

    table.with_rows(rows)
}

/// Per-day verdicts for every row, in input order.
pub fn evaluate(table: &ForecastTable, criteria: &LaunchCriteria) -> Vec<DayVerdict> {
    table
        .rows
        .iter()
        .map(|row| {
            let violations = criteria.violations(row);
            DayVerdict {
                day: row.day.clone(),
                qualifies: violations.is_empty(),
                violations,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse_table;

    fn sample() -> ForecastTable {
        let input = "Day,Temperature,Wind,Humidity,Precipitation,Lightning,Clouds\n\
                     1,15,10,50,0,no,clear\n\
                     2,35,5,40,0,no,clear\n\
                     3,20,20,80,0,NO,Few Clouds\n\
                     4,20,21,80,0,no,clear\n\
                     5,2,0,0,0,No,CLEAR\n";
        parse_table(input.as_bytes()).unwrap()
    }

    #[test]
    fn test_apply_criteria_preserves_order() {
        let table = sample();
        let filtered = apply_criteria(&table, &LaunchCriteria::default());

        let days: Vec<_> = filtered.rows.iter().map(|r| r.day.as_str()).collect();
        assert_eq!(days, vec!["1", "3", "5"]);
        assert_eq!(filtered.header, table.header);
        assert!(filtered.len() <= table.len());
    }

    #[test]
    fn test_apply_criteria_can_select_nothing() {
        let table = sample();
        let strict = LaunchCriteria {
            temperature_max: 1,
            ..LaunchCriteria::default()
        };
        let filtered = apply_criteria(&table, &strict);
        assert!(filtered.is_empty());
        assert_eq!(filtered.header, table.header);
    }

    #[test]
    fn test_evaluate_reports_violations() {
        let verdicts = evaluate(&sample(), &LaunchCriteria::default());

        assert_eq!(verdicts.len(), 5);
        assert!(verdicts[0].qualifies);
        assert!(!verdicts[1].qualifies);
        assert_eq!(verdicts[1].violations, vec![Criterion::Temperature]);
        assert_eq!(verdicts[3].violations, vec![Criterion::Wind]);
    }
}
