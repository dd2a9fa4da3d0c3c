//! Check primitives shared by all scenarios.
//!
//! Every scenario boils down to a linear chain of these checks over an
//! [`ApiResponse`](crate::client::ApiResponse); the first mismatch fails
//! the scenario with an expected-vs-actual error. No retries, no partial
//! credit.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// A contract violation: what the service answered differs from what the
/// published behavior promises.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("expected status {expected}, got {actual}: {body}")]
    Status {
        expected: u16,
        actual: u16,
        body: String,
    },

    #[error("field `{field}`: expected {expected}, got {actual}")]
    Mismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },

    #[error("field `{field}`: expected it to contain {needle:?}, got {actual:?}")]
    MissingSubstring {
        field: &'static str,
        needle: &'static str,
        actual: String,
    },

    #[error("series `{field}`: expected {expected} entries, got {actual}")]
    Length {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("block `{field}` is missing from the response")]
    MissingBlock { field: &'static str },

    #[error("failed to parse {what} body: {source}; body was: {body}")]
    Body {
        what: &'static str,
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("series `{field}` entry {index}: {value:?} is not a valid {format} value")]
    BadTimestamp {
        field: &'static str,
        index: usize,
        value: String,
        format: &'static str,
    },
}

/// Tolerance for coordinate echoes travelling through JSON floats.
const COORD_EPSILON: f64 = 1e-6;

pub fn expect_eq(field: &'static str, actual: &str, expected: &str) -> Result<(), CheckError> {
    if actual == expected {
        Ok(())
    } else {
        Err(CheckError::Mismatch {
            field,
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

pub fn expect_close(field: &'static str, actual: f64, expected: f64) -> Result<(), CheckError> {
    if (actual - expected).abs() < COORD_EPSILON {
        Ok(())
    } else {
        Err(CheckError::Mismatch {
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

pub fn expect_contains(
    field: &'static str,
    actual: &str,
    needle: &'static str,
) -> Result<(), CheckError> {
    if actual.contains(needle) {
        Ok(())
    } else {
        Err(CheckError::MissingSubstring {
            field,
            needle,
            actual: actual.to_string(),
        })
    }
}

pub fn expect_len<T>(field: &'static str, series: &[T], expected: usize) -> Result<(), CheckError> {
    if series.len() == expected {
        Ok(())
    } else {
        Err(CheckError::Length {
            field,
            expected,
            actual: series.len(),
        })
    }
}

/// Check every entry of a series parses as an ISO-8601 calendar date
/// (`2026-08-04`), the encoding the daily `time` series uses.
pub fn expect_iso_dates(field: &'static str, series: &[String]) -> Result<(), CheckError> {
    for (index, value) in series.iter().enumerate() {
        if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
            return Err(CheckError::BadTimestamp {
                field,
                index,
                value: value.clone(),
                format: "iso8601 date",
            });
        }
    }
    Ok(())
}

/// Check every entry of a series parses as a minute-precision ISO-8601
/// datetime (`2026-08-04T07:18`), the encoding sunrise and hourly `time`
/// entries use.
pub fn expect_iso_minutes(field: &'static str, series: &[String]) -> Result<(), CheckError> {
    for (index, value) in series.iter().enumerate() {
        if NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").is_err() {
            return Err(CheckError::BadTimestamp {
                field,
                index,
                value: value.clone(),
                format: "iso8601 datetime",
            });
        }
    }
    Ok(())
}
