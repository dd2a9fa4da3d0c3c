//! Static data the contract checks are written against.
//!
//! Everything here mirrors the published behavior of the Open-Meteo forecast
//! endpoint: coordinates we probe with, the variable lists we request, and
//! the literal reason strings the service answers with when validation
//! fails. If the remote service rewords a reason, these fixtures go stale
//! and the checks fail; that drift is accepted rather than papered over.

/// Public Open-Meteo API host.
pub const BASE_URL: &str = "https://api.open-meteo.com";

/// Forecast endpoint path.
pub const FORECAST_PATH: &str = "/v1/forecast";

/// Timezone sent with every positive scenario.
pub const DEFAULT_TIMEZONE: &str = "Pacific/Auckland";

/// Daily variables requested by the daily scenarios.
pub const DAILY_VARIABLES: &str = "weathercode,sunrise";

/// Hourly variables requested by the hourly scenario.
pub const HOURLY_VARIABLES: &str = "weathercode,rain,showers";

/// The forecast horizon: one week of daily entries.
pub const DAILY_SERIES_LEN: usize = 7;

/// One week of hourly entries (7 days x 24 hours).
pub const HOURLY_SERIES_LEN: usize = 168;

/// A named coordinate pair used by the positive scenarios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub const AUCKLAND: Location = Location {
    name: "Auckland",
    latitude: -36.875,
    longitude: 174.75,
};

pub const WELLINGTON: Location = Location {
    name: "Wellington",
    latitude: -41.125,
    longitude: 174.875,
};

/// One invalid-coordinate probe: the raw query value and the reason the
/// service must answer with.
#[derive(Debug, Clone, Copy)]
pub struct ValidationCase {
    pub value: &'static str,
    pub expected_reason: &'static str,
}

impl ValidationCase {
    /// Human-readable stand-in for the probe value, usable in scenario ids.
    pub fn label(&self) -> &'static str {
        if self.value.is_empty() { "empty" } else { self.value }
    }
}

pub const LATITUDE_RANGE_REASON: &str = "Latitude must be in range of -90 to 90°";
pub const LATITUDE_TYPE_REASON: &str = "Value of type 'Float' required for key 'latitude'.";
pub const LONGITUDE_RANGE_REASON: &str = "Longitude must be in range of -180 to 180°";
pub const LONGITUDE_TYPE_REASON: &str = "Value of type 'Float' required for key 'longitude'.";
pub const TIMEZONE_REQUIRED_REASON: &str = "Timezone is required";

/// Invalid latitude probes. The numeric-looking value stays a string so it
/// reaches the wire verbatim; the service parses it as a float and must
/// reject it on range, not on type.
pub const INVALID_LATITUDES: [ValidationCase; 3] = [
    ValidationCase { value: "1234567", expected_reason: LATITUDE_RANGE_REASON },
    ValidationCase { value: "testString", expected_reason: LATITUDE_TYPE_REASON },
    ValidationCase { value: "", expected_reason: LATITUDE_TYPE_REASON },
];

/// Invalid longitude probes, same shape as [`INVALID_LATITUDES`].
pub const INVALID_LONGITUDES: [ValidationCase; 3] = [
    ValidationCase { value: "1234567", expected_reason: LONGITUDE_RANGE_REASON },
    ValidationCase { value: "testString", expected_reason: LONGITUDE_TYPE_REASON },
    ValidationCase { value: "", expected_reason: LONGITUDE_TYPE_REASON },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_locations_are_within_valid_ranges() {
        for loc in [AUCKLAND, WELLINGTON] {
            assert!((-90.0..=90.0).contains(&loc.latitude), "{}", loc.name);
            assert!((-180.0..=180.0).contains(&loc.longitude), "{}", loc.name);
        }
    }

    #[test]
    fn range_probes_parse_as_out_of_range_floats() {
        let lat: f64 = INVALID_LATITUDES[0].value.parse().expect("numeric probe");
        assert!(lat > 90.0);
        assert_eq!(INVALID_LATITUDES[0].expected_reason, LATITUDE_RANGE_REASON);

        let lon: f64 = INVALID_LONGITUDES[0].value.parse().expect("numeric probe");
        assert!(lon > 180.0);
        assert_eq!(INVALID_LONGITUDES[0].expected_reason, LONGITUDE_RANGE_REASON);
    }

    #[test]
    fn type_probes_do_not_parse_as_floats() {
        for case in INVALID_LATITUDES.iter().chain(&INVALID_LONGITUDES) {
            if case.value == "1234567" {
                continue;
            }
            assert!(
                case.value.parse::<f64>().is_err(),
                "probe {:?} should not be numeric",
                case.value
            );
            assert!(case.expected_reason.contains("Value of type 'Float'"));
        }
    }

    #[test]
    fn probe_labels_never_empty() {
        for case in INVALID_LATITUDES.iter().chain(&INVALID_LONGITUDES) {
            assert!(!case.label().is_empty());
        }
        assert_eq!(INVALID_LATITUDES[2].label(), "empty");
    }
}
