//! Typed views of the forecast endpoint's JSON payloads.
//!
//! Only the fields the checks inspect are modelled. The service returns
//! more (elevation, utc offset, abbreviations); unknown fields are ignored
//! by serde and deliberately out of scope.

use serde::Deserialize;

/// Successful (200) forecast payload.
///
/// `daily*` and `hourly*` blocks are present only when the matching
/// variable set was requested, hence the `Option`s.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub generationtime_ms: f64,
    #[serde(default)]
    pub daily_units: Option<DailyUnits>,
    #[serde(default)]
    pub daily: Option<DailySeries>,
    #[serde(default)]
    pub hourly_units: Option<HourlyUnits>,
    #[serde(default)]
    pub hourly: Option<HourlySeries>,
}

/// Unit metadata for the daily variable set.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyUnits {
    pub time: String,
    pub weathercode: String,
    pub sunrise: String,
}

/// Per-day value arrays, one entry per forecast day.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub weathercode: Vec<u8>,
    pub sunrise: Vec<String>,
}

/// Unit metadata for the hourly variable set.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyUnits {
    pub time: String,
    pub weathercode: String,
    pub rain: String,
    pub showers: String,
}

/// Per-hour value arrays, one entry per forecast hour.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub weathercode: Vec<u8>,
    pub rain: Vec<f64>,
    pub showers: Vec<f64>,
}

/// Body of a 400 validation answer.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: bool,
    pub reason: String,
}
