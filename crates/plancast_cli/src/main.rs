//! Plancast CLI - scenario-based income forecasting and comparison
//!
//! Operational entry point for the plancast forecasting workspace.
//!
//! # Commands
//!
//! - `plancast list` - Show the scenario catalog and pricing studies
//! - `plancast project` - Deterministic income-statement projections
//! - `plancast simulate` - Monte Carlo cumulative-EBITDA distributions
//! - `plancast by-period` - Expected per-period metrics across iterations
//! - `plancast optimal-price` - Grid-search optima and elasticity sensitivity
//!
//! # Architecture
//!
//! As the **S**ervice layer in the C-M-E-S architecture, this crate
//! orchestrates the lower layers (core data model, demand/pricing models,
//! projection/simulation engine) behind a unified command-line interface.
//! It owns the two engine collaborators: the scenario catalog (input) and
//! the console reporting sink (output).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod commands;
mod error;
mod report;

use catalog::ScenarioCatalog;
use commands::simulate::SimulateOptions;
pub use error::{CliError, Result};

/// Output rendering for every command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Box-drawing tables and text histograms.
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Scenario forecasting and Monte Carlo comparison
#[derive(Parser)]
#[command(name = "plancast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Seed for reproducible simulation runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// TOML file replacing the built-in scenario list
    #[arg(long, global = true)]
    scenarios: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the scenario catalog and pricing studies
    List,

    /// Deterministic income-statement projection
    Project {
        /// Scenario to project (default: all)
        #[arg(short, long)]
        scenario: Option<String>,

        /// Override the scenario's projection horizon
        #[arg(long)]
        horizon: Option<usize>,
    },

    /// Monte Carlo cumulative-EBITDA simulation
    Simulate {
        /// Scenario to simulate (default: all)
        #[arg(short, long)]
        scenario: Option<String>,

        /// Number of Monte Carlo iterations
        #[arg(short, long, default_value = "10000")]
        iterations: usize,

        /// Override the scenario's projection horizon
        #[arg(long)]
        horizon: Option<usize>,

        /// Run iterations across the rayon thread pool
        #[arg(long)]
        parallel: bool,

        /// Histogram bin count for table output
        #[arg(long, default_value = "10")]
        bins: usize,
    },

    /// Expected per-period metrics across iterations
    ByPeriod {
        /// Scenario to simulate (default: all)
        #[arg(short, long)]
        scenario: Option<String>,

        /// Number of Monte Carlo iterations
        #[arg(short, long, default_value = "10000")]
        iterations: usize,

        /// Override the scenario's projection horizon
        #[arg(long)]
        horizon: Option<usize>,
    },

    /// Grid-search price optima, optionally with elasticity sensitivity
    OptimalPrice {
        /// Scenario whose study to run (default: all)
        #[arg(short, long)]
        scenario: Option<String>,

        /// Also sample elasticity this many times and report the
        /// optimal-price distribution
        #[arg(long)]
        samples: Option<usize>,
    },
}

fn load_catalog(path: Option<&PathBuf>) -> Result<ScenarioCatalog> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::ScenarioFile {
                path: path.display().to_string(),
                source,
            })?;
            let catalog =
                ScenarioCatalog::from_toml_str(&text).map_err(|source| CliError::ScenarioParse {
                    path: path.display().to_string(),
                    source,
                })?;
            info!(path = %path.display(), scenarios = catalog.scenarios().len(), "loaded scenario file");
            Ok(catalog)
        }
        None => Ok(ScenarioCatalog::builtin()),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let catalog = load_catalog(cli.scenarios.as_ref())?;

    match cli.command {
        Commands::List => commands::list::run(&catalog, cli.format),
        Commands::Project { scenario, horizon } => {
            commands::project::run(&catalog, scenario.as_deref(), horizon, cli.format)
        }
        Commands::Simulate {
            scenario,
            iterations,
            horizon,
            parallel,
            bins,
        } => commands::simulate::run(
            &catalog,
            &SimulateOptions {
                scenario,
                iterations,
                horizon,
                parallel,
                bins,
                seed: cli.seed,
            },
            cli.format,
        ),
        Commands::ByPeriod {
            scenario,
            iterations,
            horizon,
        } => commands::by_period::run(
            &catalog,
            scenario.as_deref(),
            iterations,
            horizon,
            cli.seed,
            cli.format,
        ),
        Commands::OptimalPrice { scenario, samples } => {
            commands::optimal_price::run(&catalog, scenario.as_deref(), samples, cli.seed, cli.format)
        }
    }
}

fn main() -> ExitCode {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
