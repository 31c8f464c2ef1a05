//! List command: show the catalog contents.

use serde_json::json;

use plancast_core::format::{price, units};

use crate::catalog::ScenarioCatalog;
use crate::error::Result;
use crate::report::render_table;
use crate::OutputFormat;

/// Run the list command.
pub fn run(catalog: &ScenarioCatalog, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let payload = json!({
                "scenarios": catalog.scenarios(),
                "studies": catalog.studies(),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = catalog
                .scenarios()
                .iter()
                .map(|s| {
                    vec![
                        s.name.clone(),
                        s.label.clone(),
                        s.baseline
                            .unit_sales
                            .map(units)
                            .unwrap_or_else(|| "-".to_string()),
                        s.baseline
                            .avg_unit_price
                            .map(price)
                            .unwrap_or_else(|| "-".to_string()),
                        s.horizon.to_string(),
                    ]
                })
                .collect();
            println!("Scenarios:");
            print!(
                "{}",
                render_table(
                    &["Name", "Label", "Baseline Units", "Baseline Price", "Horizon"],
                    &rows
                )
            );

            let study_rows: Vec<Vec<String>> = catalog
                .studies()
                .iter()
                .map(|s| {
                    vec![
                        s.scenario.to_string(),
                        format!(
                            "{} .. {} ({} pts)",
                            price(s.grid.start()),
                            price(s.grid.stop()),
                            s.grid.points()
                        ),
                        format!("{:.2}", s.curve.elasticity()),
                        match s.objective {
                            plancast_models::Objective::Revenue => "revenue".to_string(),
                            plancast_models::Objective::Profit { unit_cost, .. } => {
                                format!("profit (cost {})", price(unit_cost))
                            }
                        },
                    ]
                })
                .collect();
            println!("\nPricing studies:");
            print!(
                "{}",
                render_table(&["Scenario", "Price Grid", "Elasticity", "Objective"], &study_rows)
            );
        }
    }
    Ok(())
}
