//! Binary crate for the `forecast-contract` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Driving the scenario registry in `contract-core`
//! - Human-friendly outcome reporting

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
