//! Project command: deterministic single-path projections.

use serde_json::json;

use plancast_engine::projector::project;

use crate::catalog::ScenarioCatalog;
use crate::commands::select_scenarios;
use crate::error::Result;
use crate::report::projection_table;
use crate::OutputFormat;

/// Run the project command.
pub fn run(
    catalog: &ScenarioCatalog,
    scenario: Option<&str>,
    horizon: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let mut reports = Vec::new();
    for scenario in select_scenarios(catalog, scenario)? {
        let horizon = horizon.unwrap_or(scenario.horizon);
        let path = project(&scenario.baseline, &scenario.assumptions, horizon)?;
        match format {
            OutputFormat::Table => {
                println!("{} ({}-period projection)", scenario.label, horizon);
                print!("{}", projection_table(&path));
                println!();
            }
            OutputFormat::Json => {
                reports.push(json!({
                    "scenario": scenario.name,
                    "label": scenario.label,
                    "horizon": horizon,
                    "periods": path,
                }));
            }
        }
    }
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}
