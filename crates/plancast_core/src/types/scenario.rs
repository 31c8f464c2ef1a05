//! Named scenario bundles.

use serde::{Deserialize, Serialize};

use super::baseline::Baseline;
use super::params::{NoiseSpec, ParameterSet};

/// Default projection horizon in periods.
pub const DEFAULT_HORIZON: usize = 3;

fn default_horizon() -> usize {
    DEFAULT_HORIZON
}

/// A named strategic alternative: baseline, assumptions, noise and horizon.
///
/// Scenarios are constructed once per run by the catalog, then passed by
/// reference into the engine, read-only thereafter.
///
/// `cumulative_adjustment` is a scenario-specific constant added to each
/// iteration's cumulative EBITDA (e.g. a one-off channel build-out cost).
/// It is scenario data, applied by the driver after reduction, never inside
/// the recurrence itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Short identifier used on the command line (e.g. `premium`).
    pub name: String,
    /// Human-readable label for reports.
    pub label: String,
    /// Starting-period seed values.
    pub baseline: Baseline,
    /// Central assumption set.
    pub assumptions: ParameterSet,
    /// Gaussian perturbation scales for Monte Carlo runs.
    #[serde(default)]
    pub noise: NoiseSpec,
    /// Number of periods to project.
    #[serde(default = "default_horizon")]
    pub horizon: usize,
    /// Constant added to each iteration's cumulative EBITDA.
    #[serde(default)]
    pub cumulative_adjustment: f64,
}

impl Scenario {
    /// Creates a scenario with the default horizon, no noise and no
    /// cumulative adjustment.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        baseline: Baseline,
        assumptions: ParameterSet,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            baseline,
            assumptions,
            noise: NoiseSpec::none(),
            horizon: DEFAULT_HORIZON,
            cumulative_adjustment: 0.0,
        }
    }

    /// Sets the projection horizon.
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the Monte Carlo noise specification.
    pub fn with_noise(mut self, noise: NoiseSpec) -> Self {
        self.noise = noise;
        self
    }

    /// Sets the cumulative-EBITDA adjustment.
    pub fn with_cumulative_adjustment(mut self, adjustment: f64) -> Self {
        self.cumulative_adjustment = adjustment;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let scenario = Scenario::new(
            "status-quo",
            "Status Quo",
            Baseline::per_unit(2018, 101_000.0, 260.0),
            ParameterSet::new().with_sales_growth(-0.02),
        );
        assert_eq!(scenario.horizon, DEFAULT_HORIZON);
        assert!(scenario.noise.is_silent());
        assert_eq!(scenario.cumulative_adjustment, 0.0);
    }

    #[test]
    fn test_toml_defaults() {
        let toml = r#"
            name = "direct"
            label = "Direct Expansion"

            [baseline]
            year = 2018
            unit_sales = 12112.0
            avg_unit_price = 365.66

            [assumptions]
            sales_growth = 0.13
        "#;
        let scenario: Scenario = toml::from_str(toml).unwrap();
        assert_eq!(scenario.horizon, DEFAULT_HORIZON);
        assert_eq!(scenario.assumptions.sales_growth, Some(0.13));
        assert!(scenario.noise.is_silent());
    }
}
