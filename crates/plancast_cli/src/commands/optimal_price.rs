//! Optimal-price command: deterministic grid search per pricing study,
//! optionally followed by the stochastic-elasticity sensitivity study.

use serde_json::json;

use plancast_core::format::{currency, price, units};
use plancast_engine::{EngineRng, PriceSensitivity};
use plancast_models::PriceOptimizer;

use crate::catalog::{PricingStudy, ScenarioCatalog};
use crate::error::{CliError, Result};
use crate::OutputFormat;

/// Run the optimal-price command.
pub fn run(
    catalog: &ScenarioCatalog,
    scenario: Option<&str>,
    samples: Option<usize>,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let studies: Vec<&PricingStudy> = match scenario {
        Some(name) => {
            let study = catalog
                .study(name)
                .ok_or_else(|| CliError::UnknownStudy(name.to_string()))?;
            vec![study]
        }
        None => catalog.studies().iter().collect(),
    };

    let mut reports = Vec::new();
    for study in studies {
        let optimizer = PriceOptimizer::new(study.grid, study.objective);
        let optimum = optimizer.optimise(&study.curve)?;

        let sensitivity = match samples {
            Some(samples) => {
                let sensitivity = PriceSensitivity::new(samples, study.elasticity_std)?;
                let mut rng = match seed {
                    Some(seed) => EngineRng::from_seed(seed),
                    None => EngineRng::from_entropy(),
                };
                Some(sensitivity.run(&optimizer, &study.curve, &mut rng)?.summary())
            }
            None => None,
        };

        match format {
            OutputFormat::Table => {
                println!(
                    "{}: optimal price {} -> {} units, objective {}",
                    study.label,
                    price(optimum.price),
                    units(optimum.quantity),
                    currency(optimum.objective_value)
                );
                if let Some(summary) = &sensitivity {
                    println!(
                        "  elasticity ~ N({:.2}, {:.2}): mean optimal price {}, std dev {}",
                        study.curve.elasticity(),
                        study.elasticity_std,
                        price(summary.mean),
                        price(summary.std_dev)
                    );
                }
            }
            OutputFormat::Json => {
                reports.push(json!({
                    "scenario": study.scenario,
                    "label": study.label,
                    "optimum": optimum,
                    "sensitivity": sensitivity,
                }));
            }
        }
    }
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}
