//! Core library for the Open-Meteo forecast contract checks.
//!
//! This crate defines:
//! - Fixtures: the coordinates, presets and literal reason strings the
//!   checks are written against
//! - A request context over the service under test
//! - The scenario registry and the check primitives it is built from
//! - Suite configuration (base-URL override, request timeout)
//!
//! It is used by `contract-cli` and by the live integration tests in
//! `tests/live_contract.rs`.

pub mod check;
pub mod client;
pub mod config;
pub mod fixtures;
pub mod model;
pub mod query;
pub mod scenario;

pub use check::CheckError;
pub use client::{ApiResponse, ClientError, ForecastClient};
pub use config::SuiteConfig;
pub use fixtures::{AUCKLAND, Location, ValidationCase, WELLINGTON};
pub use query::ForecastQuery;
pub use scenario::{Scenario, ScenarioOutcome, SuiteError, all_scenarios, run_scenarios, run_suite};
