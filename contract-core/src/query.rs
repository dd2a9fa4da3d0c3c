//! Query-parameter construction for forecast requests.
//!
//! A query is an ordered list of key/value pairs: a coordinate source
//! (either a [`Location`] or raw strings, so malformed probes reach the
//! wire untouched) merged with one of the variable presets.

use crate::fixtures::{DAILY_VARIABLES, DEFAULT_TIMEZONE, HOURLY_VARIABLES, Location};

/// Immutable-once-built set of query parameters for one forecast request.
#[derive(Debug, Clone, Default)]
pub struct ForecastQuery {
    pairs: Vec<(String, String)>,
}

impl ForecastQuery {
    /// Start from a known-good coordinate pair.
    pub fn at(location: &Location) -> Self {
        Self::coords(location.latitude, location.longitude)
    }

    /// Start from explicit numeric coordinates.
    pub fn coords(latitude: f64, longitude: f64) -> Self {
        Self {
            pairs: vec![
                ("latitude".to_string(), latitude.to_string()),
                ("longitude".to_string(), longitude.to_string()),
            ],
        }
    }

    /// Start from a raw latitude value, keeping the longitude valid.
    /// The value is passed through verbatim, empty strings included.
    pub fn raw_latitude(value: &str, longitude: f64) -> Self {
        Self {
            pairs: vec![
                ("latitude".to_string(), value.to_string()),
                ("longitude".to_string(), longitude.to_string()),
            ],
        }
    }

    /// Start from a raw longitude value, keeping the latitude valid.
    pub fn raw_longitude(latitude: f64, value: &str) -> Self {
        Self {
            pairs: vec![
                ("latitude".to_string(), latitude.to_string()),
                ("longitude".to_string(), value.to_string()),
            ],
        }
    }

    /// Request the daily variable set.
    pub fn daily(mut self) -> Self {
        self.pairs.push(("daily".to_string(), DAILY_VARIABLES.to_string()));
        self
    }

    /// Request the hourly variable set.
    pub fn hourly(mut self) -> Self {
        self.pairs.push(("hourly".to_string(), HOURLY_VARIABLES.to_string()));
        self
    }

    /// Attach an IANA timezone. Mandatory for daily requests; the
    /// timezone-required scenario leaves it off on purpose.
    pub fn timezone(mut self, tz: &str) -> Self {
        self.pairs.push(("timezone".to_string(), tz.to_string()));
        self
    }

    /// Full daily preset for a location: daily variables plus the default
    /// timezone.
    pub fn daily_for(location: &Location) -> Self {
        Self::at(location).daily().timezone(DEFAULT_TIMEZONE)
    }

    /// Full hourly preset for a location.
    pub fn hourly_for(location: &Location) -> Self {
        Self::at(location).hourly().timezone(DEFAULT_TIMEZONE)
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
