//! The scenario registry: every published behavior of the forecast
//! endpoint we hold the service to, each one a single linear
//! request-then-check chain.
//!
//! Scenarios are independent; the runner builds a fresh
//! [`ForecastClient`] for each so nothing is shared between cases that an
//! outer harness may interleave.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::{
    check::{
        CheckError, expect_close, expect_contains, expect_eq, expect_iso_dates,
        expect_iso_minutes, expect_len,
    },
    client::{ApiResponse, ClientError, ForecastClient},
    config::SuiteConfig,
    fixtures::{
        AUCKLAND, DAILY_SERIES_LEN, DEFAULT_TIMEZONE, HOURLY_SERIES_LEN, INVALID_LATITUDES,
        INVALID_LONGITUDES, Location, TIMEZONE_REQUIRED_REASON, ValidationCase, WELLINGTON,
    },
    query::ForecastQuery,
};

/// Why a scenario did not pass: the transport broke, or the service
/// answered something the contract does not allow.
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error(transparent)]
    Transport(#[from] ClientError),

    #[error(transparent)]
    Check(#[from] CheckError),
}

/// One independently runnable contract check.
#[async_trait]
pub trait Scenario: Send + Sync {
    /// Stable identifier, usable from the CLI.
    fn id(&self) -> String;

    /// One-line human description.
    fn description(&self) -> String;

    /// Issue the request and fail fast on the first non-matching check.
    async fn run(&self, client: &ForecastClient) -> Result<(), SuiteError>;
}

/// Daily forecast for a known location: 200 with a 7-day series.
#[derive(Debug, Clone)]
pub struct DailyForecast {
    location: Location,
}

impl DailyForecast {
    pub fn new(location: Location) -> Self {
        Self { location }
    }

    fn query(&self) -> ForecastQuery {
        ForecastQuery::daily_for(&self.location)
    }

    fn check(&self, response: &ApiResponse) -> Result<(), CheckError> {
        response.expect_status(StatusCode::OK)?;
        let forecast = response.forecast()?;

        expect_close("latitude", forecast.latitude, self.location.latitude)?;
        expect_close("longitude", forecast.longitude, self.location.longitude)?;
        expect_contains("timezone", &forecast.timezone, DEFAULT_TIMEZONE)?;

        if forecast.generationtime_ms <= 0.0 {
            return Err(CheckError::Mismatch {
                field: "generationtime_ms",
                expected: "a positive duration".to_string(),
                actual: forecast.generationtime_ms.to_string(),
            });
        }

        // Requiring the units block also pins its three keys: the payload
        // does not parse without time, weathercode and sunrise.
        forecast
            .daily_units
            .ok_or(CheckError::MissingBlock { field: "daily_units" })?;

        let daily = forecast
            .daily
            .ok_or(CheckError::MissingBlock { field: "daily" })?;

        expect_len("daily.time", &daily.time, DAILY_SERIES_LEN)?;
        expect_len("daily.weathercode", &daily.weathercode, DAILY_SERIES_LEN)?;
        expect_len("daily.sunrise", &daily.sunrise, DAILY_SERIES_LEN)?;

        expect_iso_dates("daily.time", &daily.time)?;
        expect_iso_minutes("daily.sunrise", &daily.sunrise)?;

        Ok(())
    }
}

#[async_trait]
impl Scenario for DailyForecast {
    fn id(&self) -> String {
        format!("daily-forecast-{}", self.location.name.to_lowercase())
    }

    fn description(&self) -> String {
        format!(
            "Daily forecast for {}: 200 with weathercode and sunrise for {} days",
            self.location.name, DAILY_SERIES_LEN
        )
    }

    async fn run(&self, client: &ForecastClient) -> Result<(), SuiteError> {
        let response = client.get_forecast(&self.query()).await?;
        self.check(&response)?;
        Ok(())
    }
}

/// Hourly forecast for a known location: 200 with a 168-hour series and
/// exact unit encodings.
#[derive(Debug, Clone)]
pub struct HourlyForecast {
    location: Location,
}

impl HourlyForecast {
    pub fn new(location: Location) -> Self {
        Self { location }
    }

    fn query(&self) -> ForecastQuery {
        ForecastQuery::hourly_for(&self.location)
    }

    fn check(&self, response: &ApiResponse) -> Result<(), CheckError> {
        response.expect_status(StatusCode::OK)?;
        let forecast = response.forecast()?;

        expect_close("latitude", forecast.latitude, self.location.latitude)?;
        expect_close("longitude", forecast.longitude, self.location.longitude)?;
        expect_contains("timezone", &forecast.timezone, DEFAULT_TIMEZONE)?;

        let units = forecast
            .hourly_units
            .ok_or(CheckError::MissingBlock { field: "hourly_units" })?;

        expect_eq("hourly_units.time", &units.time, "iso8601")?;
        expect_eq("hourly_units.weathercode", &units.weathercode, "wmo code")?;
        expect_eq("hourly_units.rain", &units.rain, "mm")?;
        expect_eq("hourly_units.showers", &units.showers, "mm")?;

        let hourly = forecast
            .hourly
            .ok_or(CheckError::MissingBlock { field: "hourly" })?;

        expect_len("hourly.time", &hourly.time, HOURLY_SERIES_LEN)?;
        expect_len("hourly.weathercode", &hourly.weathercode, HOURLY_SERIES_LEN)?;
        expect_len("hourly.rain", &hourly.rain, HOURLY_SERIES_LEN)?;
        expect_len("hourly.showers", &hourly.showers, HOURLY_SERIES_LEN)?;

        expect_iso_minutes("hourly.time", &hourly.time)?;

        Ok(())
    }
}

#[async_trait]
impl Scenario for HourlyForecast {
    fn id(&self) -> String {
        format!("hourly-forecast-{}", self.location.name.to_lowercase())
    }

    fn description(&self) -> String {
        format!(
            "Hourly forecast for {}: 200 with weathercode, rain and showers for {} hours",
            self.location.name, HOURLY_SERIES_LEN
        )
    }

    async fn run(&self, client: &ForecastClient) -> Result<(), SuiteError> {
        let response = client.get_forecast(&self.query()).await?;
        self.check(&response)?;
        Ok(())
    }
}

/// An invalid latitude value must be rejected with 400 and the mapped
/// reason. Uses the minimal daily parameter set without a timezone; the
/// service validates coordinates first.
#[derive(Debug, Clone)]
pub struct InvalidLatitude {
    case: ValidationCase,
}

impl InvalidLatitude {
    pub fn new(case: ValidationCase) -> Self {
        Self { case }
    }

    fn query(&self) -> ForecastQuery {
        ForecastQuery::raw_latitude(self.case.value, AUCKLAND.longitude).daily()
    }

    fn check(&self, response: &ApiResponse) -> Result<(), CheckError> {
        check_rejection(response, self.case.expected_reason)
    }
}

#[async_trait]
impl Scenario for InvalidLatitude {
    fn id(&self) -> String {
        format!("invalid-latitude-{}", self.case.label())
    }

    fn description(&self) -> String {
        format!(
            "Latitude {:?} is rejected with {:?}",
            self.case.value, self.case.expected_reason
        )
    }

    async fn run(&self, client: &ForecastClient) -> Result<(), SuiteError> {
        let response = client.get_forecast(&self.query()).await?;
        self.check(&response)?;
        Ok(())
    }
}

/// An invalid longitude value must be rejected with 400 and the mapped
/// reason.
#[derive(Debug, Clone)]
pub struct InvalidLongitude {
    case: ValidationCase,
}

impl InvalidLongitude {
    pub fn new(case: ValidationCase) -> Self {
        Self { case }
    }

    fn query(&self) -> ForecastQuery {
        ForecastQuery::raw_longitude(AUCKLAND.latitude, self.case.value).daily()
    }

    fn check(&self, response: &ApiResponse) -> Result<(), CheckError> {
        check_rejection(response, self.case.expected_reason)
    }
}

#[async_trait]
impl Scenario for InvalidLongitude {
    fn id(&self) -> String {
        format!("invalid-longitude-{}", self.case.label())
    }

    fn description(&self) -> String {
        format!(
            "Longitude {:?} is rejected with {:?}",
            self.case.value, self.case.expected_reason
        )
    }

    async fn run(&self, client: &ForecastClient) -> Result<(), SuiteError> {
        let response = client.get_forecast(&self.query()).await?;
        self.check(&response)?;
        Ok(())
    }
}

/// Daily variables without a timezone must be rejected with the exact
/// reason `Timezone is required`.
#[derive(Debug, Clone)]
pub struct TimezoneRequired {
    location: Location,
}

impl TimezoneRequired {
    pub fn new(location: Location) -> Self {
        Self { location }
    }

    fn query(&self) -> ForecastQuery {
        ForecastQuery::at(&self.location).daily()
    }

    fn check(&self, response: &ApiResponse) -> Result<(), CheckError> {
        response.expect_status(StatusCode::BAD_REQUEST)?;
        let rejection = response.validation_error()?;
        expect_error_flag(&rejection)?;
        expect_eq("reason", &rejection.reason, TIMEZONE_REQUIRED_REASON)
    }
}

#[async_trait]
impl Scenario for TimezoneRequired {
    fn id(&self) -> String {
        "timezone-required".to_string()
    }

    fn description(&self) -> String {
        format!(
            "Daily forecast for {} without a timezone is rejected with {TIMEZONE_REQUIRED_REASON:?}",
            self.location.name
        )
    }

    async fn run(&self, client: &ForecastClient) -> Result<(), SuiteError> {
        let response = client.get_forecast(&self.query()).await?;
        self.check(&response)?;
        Ok(())
    }
}

/// Shared 400 checks for the invalid-coordinate sweeps: error flag set,
/// reason contains the mapped message.
fn check_rejection(response: &ApiResponse, expected_reason: &'static str) -> Result<(), CheckError> {
    response.expect_status(StatusCode::BAD_REQUEST)?;
    let rejection = response.validation_error()?;
    expect_error_flag(&rejection)?;
    expect_contains("reason", &rejection.reason, expected_reason)
}

fn expect_error_flag(rejection: &crate::model::ApiErrorBody) -> Result<(), CheckError> {
    if rejection.error {
        Ok(())
    } else {
        Err(CheckError::Mismatch {
            field: "error",
            expected: "true".to_string(),
            actual: rejection.error.to_string(),
        })
    }
}

/// Everything the suite holds the service to, in run order: the two
/// positive forecasts, the two invalid-coordinate sweeps, and the
/// mandatory-timezone check.
pub fn all_scenarios() -> Vec<Box<dyn Scenario>> {
    let mut scenarios: Vec<Box<dyn Scenario>> = vec![
        Box::new(DailyForecast::new(WELLINGTON)),
        Box::new(HourlyForecast::new(WELLINGTON)),
    ];

    for case in INVALID_LATITUDES {
        scenarios.push(Box::new(InvalidLatitude::new(case)));
    }
    for case in INVALID_LONGITUDES {
        scenarios.push(Box::new(InvalidLongitude::new(case)));
    }

    scenarios.push(Box::new(TimezoneRequired::new(AUCKLAND)));
    scenarios
}

/// Result of one scenario, pass or fail, for reporting.
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub id: String,
    pub description: String,
    pub result: Result<(), SuiteError>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Run the given scenarios in order, a fresh client per scenario, and
/// collect every outcome. Client construction failure aborts the sweep;
/// scenario failures do not.
pub async fn run_scenarios(
    config: &SuiteConfig,
    scenarios: Vec<Box<dyn Scenario>>,
) -> Result<Vec<ScenarioOutcome>, ClientError> {
    let mut outcomes = Vec::with_capacity(scenarios.len());

    for scenario in scenarios {
        let client = ForecastClient::new(config)?;
        let result = scenario.run(&client).await;
        outcomes.push(ScenarioOutcome {
            id: scenario.id(),
            description: scenario.description(),
            result,
        });
    }

    Ok(outcomes)
}

/// Run the whole registry.
pub async fn run_suite(config: &SuiteConfig) -> Result<Vec<ScenarioOutcome>, ClientError> {
    run_scenarios(config, all_scenarios()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{LATITUDE_RANGE_REASON, LONGITUDE_TYPE_REASON};
    use serde_json::json;
    use std::collections::HashSet;

    fn ok_response(body: serde_json::Value) -> ApiResponse {
        ApiResponse {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }

    fn rejected_response(reason: &str) -> ApiResponse {
        ApiResponse {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "error": true, "reason": reason }).to_string(),
        }
    }

    fn canned_daily_body() -> serde_json::Value {
        let time: Vec<String> = (1..=7).map(|d| format!("2026-08-{d:02}")).collect();
        let sunrise: Vec<String> = (1..=7).map(|d| format!("2026-08-{d:02}T07:15")).collect();
        json!({
            "latitude": -41.125,
            "longitude": 174.875,
            "generationtime_ms": 0.244,
            "timezone": "Pacific/Auckland",
            "daily_units": { "time": "iso8601", "weathercode": "wmo code", "sunrise": "iso8601" },
            "daily": {
                "time": time,
                "weathercode": [3, 61, 80, 2, 1, 0, 45],
                "sunrise": sunrise
            }
        })
    }

    fn canned_hourly_body() -> serde_json::Value {
        let time: Vec<String> = (0..168)
            .map(|h| format!("2026-08-{:02}T{:02}:00", 1 + h / 24, h % 24))
            .collect();
        let weathercode: Vec<u8> = (0..168).map(|h| if h % 3 == 0 { 61 } else { 2 }).collect();
        let rain = vec![0.0; 168];
        let showers = vec![0.1; 168];
        json!({
            "latitude": -41.125,
            "longitude": 174.875,
            "generationtime_ms": 0.391,
            "timezone": "Pacific/Auckland",
            "hourly_units": { "time": "iso8601", "weathercode": "wmo code", "rain": "mm", "showers": "mm" },
            "hourly": {
                "time": time,
                "weathercode": weathercode,
                "rain": rain,
                "showers": showers
            }
        })
    }

    #[test]
    fn registry_covers_all_published_behaviors() {
        let scenarios = all_scenarios();
        assert_eq!(scenarios.len(), 9);

        let ids: HashSet<String> = scenarios.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), scenarios.len(), "scenario ids must be unique");
        assert!(ids.contains("daily-forecast-wellington"));
        assert!(ids.contains("hourly-forecast-wellington"));
        assert!(ids.contains("invalid-latitude-empty"));
        assert!(ids.contains("invalid-longitude-testString"));
        assert!(ids.contains("timezone-required"));
    }

    #[test]
    fn daily_check_accepts_conforming_body() {
        let scenario = DailyForecast::new(WELLINGTON);
        scenario
            .check(&ok_response(canned_daily_body()))
            .expect("conforming daily body");
    }

    #[test]
    fn daily_check_rejects_short_sunrise_series() {
        let mut body = canned_daily_body();
        body["daily"]["sunrise"]
            .as_array_mut()
            .expect("sunrise array")
            .pop();

        let err = DailyForecast::new(WELLINGTON)
            .check(&ok_response(body))
            .unwrap_err();
        match err {
            CheckError::Length { field, expected, actual } => {
                assert_eq!(field, "daily.sunrise");
                assert_eq!(expected, 7);
                assert_eq!(actual, 6);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn daily_check_rejects_wrong_timezone() {
        let mut body = canned_daily_body();
        body["timezone"] = json!("Etc/GMT");

        let err = DailyForecast::new(WELLINGTON)
            .check(&ok_response(body))
            .unwrap_err();
        assert!(matches!(err, CheckError::MissingSubstring { field: "timezone", .. }));
    }

    #[test]
    fn daily_check_rejects_missing_units_block() {
        let mut body = canned_daily_body();
        body.as_object_mut().expect("object").remove("daily_units");

        let err = DailyForecast::new(WELLINGTON)
            .check(&ok_response(body))
            .unwrap_err();
        assert!(matches!(err, CheckError::MissingBlock { field: "daily_units" }));
    }

    #[test]
    fn daily_check_rejects_wrong_coordinates() {
        let mut body = canned_daily_body();
        body["latitude"] = json!(-36.875);

        let err = DailyForecast::new(WELLINGTON)
            .check(&ok_response(body))
            .unwrap_err();
        assert!(matches!(err, CheckError::Mismatch { field: "latitude", .. }));
    }

    #[test]
    fn hourly_check_accepts_conforming_body() {
        let scenario = HourlyForecast::new(WELLINGTON);
        scenario
            .check(&ok_response(canned_hourly_body()))
            .expect("conforming hourly body");
    }

    #[test]
    fn hourly_check_rejects_wrong_rain_unit() {
        let mut body = canned_hourly_body();
        body["hourly_units"]["rain"] = json!("cm");

        let err = HourlyForecast::new(WELLINGTON)
            .check(&ok_response(body))
            .unwrap_err();
        assert!(matches!(err, CheckError::Mismatch { field: "hourly_units.rain", .. }));
    }

    #[test]
    fn hourly_check_rejects_truncated_series() {
        let mut body = canned_hourly_body();
        body["hourly"]["rain"]
            .as_array_mut()
            .expect("rain array")
            .truncate(24);

        let err = HourlyForecast::new(WELLINGTON)
            .check(&ok_response(body))
            .unwrap_err();
        assert!(matches!(
            err,
            CheckError::Length { field: "hourly.rain", actual: 24, .. }
        ));
    }

    #[test]
    fn invalid_latitude_check_accepts_mapped_rejection() {
        let scenario = InvalidLatitude::new(INVALID_LATITUDES[0]);
        scenario
            .check(&rejected_response(LATITUDE_RANGE_REASON))
            .expect("mapped rejection");
    }

    #[test]
    fn invalid_latitude_check_rejects_unexpected_reason() {
        let scenario = InvalidLatitude::new(INVALID_LATITUDES[0]);
        let err = scenario
            .check(&rejected_response("Latitude looks odd"))
            .unwrap_err();
        assert!(matches!(err, CheckError::MissingSubstring { field: "reason", .. }));
    }

    #[test]
    fn invalid_latitude_check_requires_error_flag() {
        let scenario = InvalidLatitude::new(INVALID_LATITUDES[0]);
        let response = ApiResponse {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "error": false, "reason": LATITUDE_RANGE_REASON }).to_string(),
        };

        let err = scenario.check(&response).unwrap_err();
        assert!(matches!(err, CheckError::Mismatch { field: "error", .. }));
    }

    #[test]
    fn invalid_longitude_check_accepts_type_rejection() {
        let scenario = InvalidLongitude::new(INVALID_LONGITUDES[2]);
        scenario
            .check(&rejected_response(LONGITUDE_TYPE_REASON))
            .expect("mapped rejection");
    }

    #[test]
    fn rejection_check_fails_on_a_200() {
        let scenario = InvalidLatitude::new(INVALID_LATITUDES[0]);
        let err = scenario
            .check(&ok_response(canned_daily_body()))
            .unwrap_err();
        assert!(matches!(err, CheckError::Status { expected: 400, actual: 200, .. }));
    }

    #[test]
    fn timezone_required_reason_must_match_exactly() {
        let scenario = TimezoneRequired::new(AUCKLAND);
        scenario
            .check(&rejected_response(TIMEZONE_REQUIRED_REASON))
            .expect("exact reason");

        let padded = rejected_response("Timezone is required for daily data");
        assert!(scenario.check(&padded).is_err(), "reason match is exact, not substring");
    }

    #[test]
    fn negative_queries_omit_the_timezone() {
        let scenario = InvalidLatitude::new(INVALID_LATITUDES[1]);
        let pairs = scenario.query();
        assert!(pairs.pairs().iter().all(|(k, _)| k != "timezone"));
        assert!(pairs.pairs().iter().any(|(k, v)| k == "daily" && v == "weathercode,sunrise"));

        let scenario = TimezoneRequired::new(AUCKLAND);
        let pairs = scenario.query();
        assert!(pairs.pairs().iter().all(|(k, _)| k != "timezone"));
    }
}
