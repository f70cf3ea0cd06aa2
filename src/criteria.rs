//! Launch-safety thresholds and the predicates that test a forecast day against them.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::table::ForecastRow;

pub const TEMPERATURE_MIN: i32 = 2;
pub const TEMPERATURE_MAX: i32 = 31;
pub const WIND_MAX: i32 = 20;
pub const HUMIDITY_MAX: i32 = 80;
pub const PRECIPITATION_EXACT: i32 = 0;
pub const LIGHTNING_REQUIRED: &str = "no";
pub const ACCEPTED_CLOUDS: &[&str] = &["clear", "few clouds"];

/// One of the six launch-safety checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Temperature,
    Wind,
    Humidity,
    Precipitation,
    Lightning,
    Clouds,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Criterion::Temperature => "temperature",
            Criterion::Wind => "wind",
            Criterion::Humidity => "humidity",
            Criterion::Precipitation => "precipitation",
            Criterion::Lightning => "lightning",
            Criterion::Clouds => "clouds",
        };
        f.write_str(name)
    }
}

/// Thresholds a day must meet to qualify for launch.
///
/// Defaults reproduce the fixed launch rules. A JSON file may override any
/// subset of the fields:
/// ```json
/// {
///   "temperature_max": 28,
///   "accepted_clouds": ["clear"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchCriteria {
    pub temperature_min: i32,
    pub temperature_max: i32,
    pub wind_max: i32,
    pub humidity_max: i32,
    pub precipitation_exact: i32,
    pub lightning_must_equal: String,
    pub accepted_clouds: Vec<String>,
}

impl Default for LaunchCriteria {
    fn default() -> Self {
        LaunchCriteria {
            temperature_min: TEMPERATURE_MIN,
            temperature_max: TEMPERATURE_MAX,
            wind_max: WIND_MAX,
            humidity_max: HUMIDITY_MAX,
            precipitation_exact: PRECIPITATION_EXACT,
            lightning_must_equal: LIGHTNING_REQUIRED.to_string(),
            accepted_clouds: ACCEPTED_CLOUDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl LaunchCriteria {
    /// Loads thresholds from a JSON file at `path`; absent keys keep their defaults.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let criteria: LaunchCriteria = serde_json::from_str(&content)?;
        Ok(criteria)
    }

    /// Loads from `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn temperature_in_range(&self, t: i32) -> bool {
        t >= self.temperature_min && t <= self.temperature_max
    }

    pub fn wind_below_threshold(&self, w: i32) -> bool {
        w <= self.wind_max
    }

    pub fn humidity_below_threshold(&self, h: i32) -> bool {
        h <= self.humidity_max
    }

    pub fn precipitation_match(&self, p: i32) -> bool {
        p == self.precipitation_exact
    }

    /// Case-insensitive.
    pub fn lightning_match(&self, l: &str) -> bool {
        l.eq_ignore_ascii_case(&self.lightning_must_equal)
    }

    /// Case-insensitive; anything outside the accepted set is rejected.
    pub fn clouds_match(&self, c: &str) -> bool {
        self.accepted_clouds
            .iter()
            .any(|accepted| c.eq_ignore_ascii_case(accepted))
    }

    /// True when every criterion holds for `row`.
    pub fn accepts(&self, row: &ForecastRow) -> bool {
        self.temperature_in_range(row.temperature)
            && self.wind_below_threshold(row.wind_speed)
            && self.humidity_below_threshold(row.humidity)
            && self.precipitation_match(row.precipitation)
            && self.lightning_match(&row.lightning)
            && self.clouds_match(&row.clouds)
    }

    /// Criteria `row` fails, in check order. Empty when the row qualifies.
    pub fn violations(&self, row: &ForecastRow) -> Vec<Criterion> {
        let checks = [
            (Criterion::Temperature, self.temperature_in_range(row.temperature)),
            (Criterion::Wind, self.wind_below_threshold(row.wind_speed)),
            (Criterion::Humidity, self.humidity_below_threshold(row.humidity)),
            (Criterion::Precipitation, self.precipitation_match(row.precipitation)),
            (Criterion::Lightning, self.lightning_match(&row.lightning)),
            (Criterion::Clouds, self.clouds_match(&row.clouds)),
        ];

        checks
            .into_iter()
            .filter(|(_, ok)| !ok)
            .map(|(criterion, _)| criterion)
            .collect()
    }
}
