use anyhow::bail;
use clap::{Parser, Subcommand};
use contract_core::{SuiteConfig, all_scenarios, run_scenarios};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "forecast-contract",
    bin_name = "forecast-contract",
    version,
    about = "Black-box contract checks for the Open-Meteo forecast API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the registered scenarios.
    List,

    /// Run scenarios against the configured service and report outcomes.
    Run {
        /// Run a single scenario by id; defaults to the whole registry.
        #[arg(long)]
        scenario: Option<String>,

        /// Target host for this run only, e.g. a self-hosted instance.
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Persist suite settings (target host, request timeout).
    Configure {
        /// Scheme + host of the service under test.
        #[arg(long)]
        base_url: Option<String>,

        /// Per-request timeout in seconds.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::List => {
                for scenario in all_scenarios() {
                    println!("{:<32} {}", scenario.id(), scenario.description());
                }
                Ok(())
            }
            Command::Run { scenario, base_url } => run_checks(scenario, base_url).await,
            Command::Configure { base_url, timeout_secs } => configure(base_url, timeout_secs),
        }
    }
}

async fn run_checks(scenario: Option<String>, base_url: Option<String>) -> anyhow::Result<()> {
    let mut config = SuiteConfig::load()?;
    if let Some(url) = base_url {
        config = config.with_base_url(url);
    }

    let mut scenarios = all_scenarios();
    if let Some(id) = &scenario {
        scenarios.retain(|s| s.id() == *id);
        if scenarios.is_empty() {
            bail!("Unknown scenario '{id}'. Run `forecast-contract list` to see the registry.");
        }
    }

    println!("Checking {} scenario(s) against {}", scenarios.len(), config.base_url);
    println!();

    let outcomes = run_scenarios(&config, scenarios).await?;

    let mut failed = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => println!("PASS  {}", outcome.id),
            Err(err) => {
                failed += 1;
                println!("FAIL  {}", outcome.id);
                println!("      {err}");
            }
        }
    }

    println!();
    println!(
        "{} passed, {failed} failed, {} total",
        outcomes.len() - failed,
        outcomes.len()
    );

    if failed > 0 {
        bail!("{failed} scenario(s) failed against {}", config.base_url);
    }

    Ok(())
}

fn configure(base_url: Option<String>, timeout_secs: Option<u64>) -> anyhow::Result<()> {
    let mut config = SuiteConfig::load()?;

    if let Some(url) = base_url {
        config.base_url = url;
    }
    if let Some(secs) = timeout_secs {
        config.timeout_secs = secs;
    }

    config.save()?;
    println!(
        "Saved configuration to {}",
        SuiteConfig::config_file_path()?.display()
    );

    Ok(())
}
