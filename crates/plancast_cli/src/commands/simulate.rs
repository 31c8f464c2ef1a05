//! Simulate command: cumulative-EBITDA Monte Carlo per alternative.

use serde_json::json;
use tracing::info;

use plancast_engine::{MonteCarloDriver, SimulationConfig};

use crate::catalog::ScenarioCatalog;
use crate::commands::select_scenarios;
use crate::error::Result;
use crate::report::{histogram_chart, summary_line};
use crate::OutputFormat;

/// Options for the simulate command.
pub struct SimulateOptions {
    /// Optional scenario selection; `None` runs the whole catalog.
    pub scenario: Option<String>,
    /// Iterations per scenario.
    pub iterations: usize,
    /// Optional horizon override.
    pub horizon: Option<usize>,
    /// Run iterations across the rayon thread pool.
    pub parallel: bool,
    /// Histogram bin count for table output.
    pub bins: usize,
    /// Optional seed for reproducibility.
    pub seed: Option<u64>,
}

/// Run the simulate command.
pub fn run(catalog: &ScenarioCatalog, options: &SimulateOptions, format: OutputFormat) -> Result<()> {
    let mut reports = Vec::new();
    for scenario in select_scenarios(catalog, options.scenario.as_deref())? {
        let mut scenario = scenario.clone();
        if let Some(horizon) = options.horizon {
            scenario.horizon = horizon;
        }

        let mut builder = SimulationConfig::builder().iterations(options.iterations);
        if let Some(seed) = options.seed {
            builder = builder.seed(seed);
        }
        let mut driver = MonteCarloDriver::new(builder.build()?)?;
        let seed = driver.seed();

        let result = if options.parallel {
            driver.run_cumulative_par(&scenario)?
        } else {
            driver.run_cumulative(&scenario)?
        };
        let summary = result.summary();
        info!(scenario = %scenario.name, seed, "simulation complete");

        match format {
            OutputFormat::Table => {
                println!(
                    "{}  [{} iterations, {} periods, seed {}]",
                    summary_line(&scenario.label, &summary),
                    result.len(),
                    scenario.horizon,
                    seed
                );
                if let Some(histogram) = result.histogram(options.bins) {
                    print!("{}", histogram_chart(&histogram));
                }
                println!();
            }
            OutputFormat::Json => {
                reports.push(json!({
                    "scenario": scenario.name,
                    "label": scenario.label,
                    "iterations": result.len(),
                    "horizon": scenario.horizon,
                    "seed": seed,
                    "cumulative_ebitda": summary,
                }));
            }
        }
    }
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}
