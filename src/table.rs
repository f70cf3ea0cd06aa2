//! Forecast table model and the line-splitting reader that produces it.
//!
//! Input is plain comma-separated text: the first line names the columns,
//! every following line is one forecast day in the order
//! `day,temperature,wind,humidity,precipitation,lightning,clouds`.
//! Quoting is not recognized, so a comma always separates fields.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::PipelineError;

/// Number of fields on every line, header included.
pub const FIELD_COUNT: usize = 7;

/// Column indices holding integer parameters (temperature through precipitation).
pub const NUMERIC_COLUMNS: std::ops::RangeInclusive<usize> = 1..=4;

/// One day's forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRow {
    pub day: String,
    pub temperature: i32,
    pub wind_speed: i32,
    pub humidity: i32,
    pub precipitation: i32,
    pub lightning: String,
    pub clouds: String,
}

impl ForecastRow {
    /// Builds a row from a raw record, `line` is only used for error reporting.
    pub fn from_record(record: &StringRecord, line: u64) -> Result<Self, PipelineError> {
        if record.len() != FIELD_COUNT {
            return Err(PipelineError::malformed(
                line,
                format!("expected {} fields, found {}", FIELD_COUNT, record.len()),
            ));
        }

        let int = |idx: usize, name: &str| -> Result<i32, PipelineError> {
            record[idx].parse::<i32>().map_err(|_| {
                PipelineError::malformed(
                    line,
                    format!("{} is not an integer: {:?}", name, &record[idx]),
                )
            })
        };

        Ok(ForecastRow {
            day: record[0].to_string(),
            temperature: int(1, "temperature")?,
            wind_speed: int(2, "wind")?,
            humidity: int(3, "humidity")?,
            precipitation: int(4, "precipitation")?,
            lightning: record[5].to_string(),
            clouds: record[6].to_string(),
        })
    }

    /// Integer value of a numeric column, `None` for the day and categorical columns.
    pub fn numeric_value(&self, column: usize) -> Option<i32> {
        match column {
            1 => Some(self.temperature),
            2 => Some(self.wind_speed),
            3 => Some(self.humidity),
            4 => Some(self.precipitation),
            _ => None,
        }
    }
}

/// Header names plus data rows, kept apart so no loop has to skip row 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastTable {
    pub header: Vec<String>,
    pub rows: Vec<ForecastRow>,
}

impl ForecastTable {
    /// Same header, different rows. Used to derive filtered tables.
    pub fn with_rows(&self, rows: Vec<ForecastRow>) -> Self {
        ForecastTable {
            header: self.header.clone(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column name from the header, or an empty string past its end.
    pub fn parameter_name(&self, column: usize) -> &str {
        self.header.get(column).map(String::as_str).unwrap_or("")
    }

    /// All values of a numeric column, in row order.
    pub fn column_values(&self, column: usize) -> Vec<i32> {
        self.rows
            .iter()
            .filter_map(|row| row.numeric_value(column))
            .collect()
    }
}

/// Parses forecast text into a [`ForecastTable`].
///
/// # Errors
///
/// Returns [`PipelineError::MissingHeader`] for empty input and
/// [`PipelineError::MalformedRow`] for the first line with a wrong field
/// count or a non-integer numeric field.
pub fn parse_table(bytes: &[u8]) -> Result<ForecastTable, PipelineError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let mut records = rdr.records();

    let header: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(str::to_string).collect(),
        None => return Err(PipelineError::MissingHeader),
    };

    if header.len() != FIELD_COUNT {
        return Err(PipelineError::malformed(
            1,
            format!("header has {} columns, expected {}", header.len(), FIELD_COUNT),
        ));
    }

    let mut rows = Vec::new();
    for result in records {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(ForecastRow::from_record(&record, line)?);
    }

    Ok(ForecastTable { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Day,Temperature,Wind,Humidity,Precipitation,Lightning,Clouds";

    #[test]
    fn test_parse_header_and_rows() {
        let input = format!("{HEADER}\n1,15,10,50,0,No,Clear\n2,35,5,40,0,no,few clouds\n");
        let table = parse_table(input.as_bytes()).unwrap();

        assert_eq!(table.header.len(), FIELD_COUNT);
        assert_eq!(table.parameter_name(1), "Temperature");
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].day, "1");
        assert_eq!(table.rows[0].lightning, "No");
        assert_eq!(table.rows[1].temperature, 35);
        assert_eq!(table.rows[1].clouds, "few clouds");
    }

    #[test]
    fn test_parse_header_only() {
        let table = parse_table(HEADER.as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_empty_input() {
        let result = parse_table(b"");
        assert!(matches!(result, Err(PipelineError::MissingHeader)));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let input = format!("{HEADER}\n1,15,10,50,0,no,clear\n2,15,10,50,0,no\n");
        match parse_table(input.as_bytes()) {
            Err(PipelineError::MalformedRow { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("found 6"));
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_short_header() {
        let input = "Day,Temperature,Wind,Humidity,Precipitation,Lightning\n1,15,10,50,0,no,clear\n";
        match parse_table(input.as_bytes()) {
            Err(PipelineError::MalformedRow { line, reason }) => {
                assert_eq!(line, 1);
                assert!(reason.contains("header has 6 columns"));
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_non_integer_field() {
        let input = format!("{HEADER}\n1,warm,10,50,0,no,clear\n");
        match parse_table(input.as_bytes()) {
            Err(PipelineError::MalformedRow { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.starts_with("temperature"));
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_quotes_are_not_special() {
        let input = format!("{HEADER}\n\"1,15,10,50,0,no,clear\n");
        let table = parse_table(input.as_bytes()).unwrap();
        assert_eq!(table.rows[0].day, "\"1");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let input = format!("{HEADER}\n1, 15 ,10,50,0, no ,clear\n");
        let table = parse_table(input.as_bytes()).unwrap();
        assert_eq!(table.rows[0].temperature, 15);
        assert_eq!(table.rows[0].lightning, "no");
    }

    #[test]
    fn test_column_values_skip_categorical() {
        let input = format!("{HEADER}\n1,15,10,50,0,no,clear\n2,20,12,60,0,no,clear\n");
        let table = parse_table(input.as_bytes()).unwrap();

        assert_eq!(table.column_values(1), vec![15, 20]);
        assert_eq!(table.column_values(3), vec![50, 60]);
        assert!(table.column_values(5).is_empty());
    }
}
