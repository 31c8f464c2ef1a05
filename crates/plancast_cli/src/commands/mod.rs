//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod by_period;
pub mod list;
pub mod optimal_price;
pub mod project;
pub mod simulate;

use plancast_core::Scenario;

use crate::catalog::ScenarioCatalog;
use crate::error::{CliError, Result};

/// Resolves the scenario selection: a named scenario, or the whole catalog.
pub fn select_scenarios<'a>(
    catalog: &'a ScenarioCatalog,
    name: Option<&str>,
) -> Result<Vec<&'a Scenario>> {
    match name {
        Some(name) => catalog
            .scenario(name)
            .map(|s| vec![s])
            .ok_or_else(|| CliError::UnknownScenario(name.to_string())),
        None => Ok(catalog.scenarios().iter().collect()),
    }
}
