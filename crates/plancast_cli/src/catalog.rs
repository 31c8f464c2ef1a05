//! Built-in scenario catalog.
//!
//! One `ScenarioCatalog` is constructed per run and passed by reference into
//! the commands; no process-wide mutable state. The built-in catalog holds
//! the status-quo product line and the three strategic alternatives, plus
//! the price-demand study behind each alternative's baseline. A TOML file
//! can replace the scenario list; the pricing studies stay built-in.

use serde::{Deserialize, Serialize};

use plancast_core::{Baseline, NoiseSpec, ParameterSet, Scenario};
use plancast_models::{DemandCurve, Objective, PriceGrid};

/// A price-demand study backing one alternative's baseline pricing decision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PricingStudy {
    /// Scenario this study belongs to.
    pub scenario: &'static str,
    /// Human-readable label for reports.
    pub label: &'static str,
    /// Demand curve anchored at the observed reference point.
    pub curve: DemandCurve,
    /// Candidate price grid.
    pub grid: PriceGrid,
    /// Objective maximised over the grid.
    pub objective: Objective,
    /// Elasticity scale for the stochastic sensitivity study.
    pub elasticity_std: f64,
}

/// The scenarios and pricing studies for one run.
#[derive(Clone, Debug)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
    studies: Vec<PricingStudy>,
}

/// Default cumulative-run noise scales: 1% on growth and percentage fields,
/// 0.5% on the commission rate.
fn default_noise() -> NoiseSpec {
    NoiseSpec::none()
        .with_sales_growth(0.01)
        .with_unit_sales_growth(0.01)
        .with_price_growth(0.01)
        .with_cogs_percent(0.01)
        .with_commission_rate(0.005)
        .with_ga_percent(0.01)
}

/// Finer noise scales used by the per-period expectation study.
pub fn by_period_noise() -> NoiseSpec {
    NoiseSpec::none()
        .with_sales_growth(0.005)
        .with_unit_sales_growth(0.005)
        .with_price_growth(0.005)
        .with_cogs_percent(0.005)
        .with_commission_rate(0.002)
        .with_ga_percent(0.005)
}

impl ScenarioCatalog {
    /// The built-in catalog: status quo plus the three alternatives.
    ///
    /// Baselines for the alternatives are the optimal quantity/price pairs
    /// from their pricing studies; the status-quo line carries the last
    /// actual year unchanged.
    pub fn builtin() -> Self {
        let scenarios = vec![
            Scenario::new(
                "status-quo",
                "Status Quo (Legacy Line)",
                Baseline::per_unit(2018, 101_000.0, 260.0),
                ParameterSet::new()
                    .with_sales_growth(-0.02)
                    .with_unit_sales_growth(0.0)
                    .with_price_growth(0.0)
                    .with_cogs_percent(0.47)
                    .with_commission_rate(0.05)
                    .with_ga_percent(0.25),
            )
            .with_noise(default_noise()),
            Scenario::new(
                "premium",
                "Alt 1: Premium Line",
                Baseline::per_unit(2018, 13_403.0, 400.0),
                ParameterSet::new()
                    .with_sales_growth(0.04)
                    .with_unit_sales_growth(0.02)
                    .with_price_growth(0.0)
                    .with_cogs_percent(0.46)
                    .with_commission_rate(0.05)
                    .with_ga_percent(0.23),
            )
            .with_noise(default_noise()),
            Scenario::new(
                "entry-level",
                "Alt 2: Mass-Retail Entry Level",
                Baseline::per_unit(2018, 71_777.0, 65.10),
                ParameterSet::new()
                    .with_sales_growth(0.21)
                    .with_unit_sales_growth(0.15)
                    .with_price_growth(0.02)
                    .with_cogs_percent(32.5 / 65.1)
                    .with_commission_rate(0.03)
                    .with_ga_percent(0.20),
            )
            .with_noise(default_noise()),
            Scenario::new(
                "direct",
                "Alt 3: Direct-to-Consumer Expansion",
                Baseline::per_unit(2018, 12_112.0, 365.66),
                ParameterSet::new()
                    .with_sales_growth(0.13)
                    .with_unit_sales_growth(0.10)
                    .with_price_growth(0.03)
                    .with_cogs_percent(0.45)
                    .with_commission_rate(0.0)
                    .with_ga_percent(0.22),
            )
            .with_noise(default_noise())
            // One-off channel build-out cost, netted from cumulative EBITDA.
            .with_cumulative_adjustment(-500_000.0),
        ];

        let studies = vec![
            PricingStudy {
                scenario: "premium",
                label: "Alt 1: Premium Line",
                curve: DemandCurve::new(7_000.0, 800.0, 2.25)
                    .expect("static premium demand curve is valid"),
                grid: PriceGrid::new(600.0, 1_000.0, 100)
                    .expect("static premium price grid is valid"),
                // $400 unit cost, 5% commission netted off the retail price.
                objective: Objective::profit_with_commission(400.0, 0.05),
                elasticity_std: 0.2,
            },
            PricingStudy {
                scenario: "entry-level",
                label: "Alt 2: Mass-Retail Entry Level",
                curve: DemandCurve::new(72_000.0, 65.0, 2.0)
                    .expect("static entry-level demand curve is valid"),
                grid: PriceGrid::new(55.0, 80.0, 100)
                    .expect("static entry-level price grid is valid"),
                // $32.50 unit cost, no commission on the wholesale channel.
                objective: Objective::profit(32.5),
                elasticity_std: 0.2,
            },
            PricingStudy {
                scenario: "direct",
                label: "Alt 3: Direct-to-Consumer Expansion",
                curve: DemandCurve::new(20_200.0, 260.0, 1.5)
                    .expect("static direct demand curve is valid"),
                grid: PriceGrid::new(200.0, 600.0, 100)
                    .expect("static direct price grid is valid"),
                objective: Objective::Revenue,
                elasticity_std: 0.2,
            },
        ];

        Self { scenarios, studies }
    }

    /// Builds a catalog from a TOML scenario file, keeping the built-in
    /// pricing studies.
    ///
    /// The file holds an array of `[[scenario]]` tables matching the
    /// [`Scenario`] shape.
    pub fn from_toml_str(toml: &str) -> Result<Self, toml::de::Error> {
        #[derive(Deserialize)]
        struct CatalogFile {
            #[serde(rename = "scenario")]
            scenarios: Vec<Scenario>,
        }
        let file: CatalogFile = toml::from_str(toml)?;
        Ok(Self {
            scenarios: file.scenarios,
            studies: Self::builtin().studies,
        })
    }

    /// All scenarios in catalog order.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// All pricing studies in catalog order.
    pub fn studies(&self) -> &[PricingStudy] {
        &self.studies
    }

    /// Looks up a scenario by name.
    pub fn scenario(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// Looks up a pricing study by scenario name.
    pub fn study(&self, name: &str) -> Option<&PricingStudy> {
        self.studies.iter().find(|s| s.scenario == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builtin_contents() {
        let catalog = ScenarioCatalog::builtin();
        assert_eq!(catalog.scenarios().len(), 4);
        assert_eq!(catalog.studies().len(), 3);
        assert!(catalog.scenario("premium").is_some());
        assert!(catalog.scenario("nonexistent").is_none());
        assert!(catalog.study("direct").is_some());
        assert!(catalog.study("status-quo").is_none());
    }

    #[test]
    fn test_direct_carries_buildout_adjustment() {
        let catalog = ScenarioCatalog::builtin();
        let direct = catalog.scenario("direct").unwrap();
        assert_relative_eq!(direct.cumulative_adjustment, -500_000.0);
        assert_relative_eq!(
            catalog.scenario("premium").unwrap().cumulative_adjustment,
            0.0
        );
    }

    #[test]
    fn test_builtin_scenarios_all_carry_noise() {
        let catalog = ScenarioCatalog::builtin();
        for scenario in catalog.scenarios() {
            assert!(!scenario.noise.is_silent(), "{} has no noise", scenario.name);
        }
    }

    #[test]
    fn test_from_toml_overrides_scenarios() {
        let toml = r#"
            [[scenario]]
            name = "pilot"
            label = "Pilot Line"
            horizon = 5

            [scenario.baseline]
            year = 2020
            unit_sales = 500.0
            avg_unit_price = 120.0

            [scenario.assumptions]
            unit_sales_growth = 0.05
            price_growth = 0.0
            cogs_percent = 0.5
            commission_rate = 0.02
            ga_percent = 0.2
        "#;
        let catalog = ScenarioCatalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.scenarios().len(), 1);
        let pilot = catalog.scenario("pilot").unwrap();
        assert_eq!(pilot.horizon, 5);
        assert!(pilot.noise.is_silent());
        // Studies remain the built-in ones.
        assert_eq!(catalog.studies().len(), 3);
    }
}
