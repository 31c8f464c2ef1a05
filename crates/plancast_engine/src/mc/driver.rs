//! Monte Carlo driver over the projection recurrence.
//!
//! Each iteration draws one perturbed assumption set (every field with a
//! configured noise scale sampled independently from a Gaussian centred on
//! its central value) and projects the scenario's baseline over the full
//! horizon with that single sampled set. Parameters are never re-sampled
//! period to period within an iteration.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use plancast_core::{NoiseSpec, ParameterSet, PeriodState, Scenario};

use super::config::{SimulationConfig, MAX_HORIZON};
use super::error::{ConfigError, SimulationError};
use super::result::{ByPeriodResult, PeriodMeans, SimulationResult};
use crate::projector::project;
use crate::rng::EngineRng;

/// Monte Carlo simulation driver.
///
/// Owns the configuration and the random number stream. The sequential
/// entry points advance one generator across iterations; the parallel
/// entry point derives an independent substream per iteration, so a fixed
/// seed reproduces identical output regardless of thread count.
///
/// # Examples
///
/// ```rust
/// use plancast_core::{Baseline, NoiseSpec, ParameterSet, Scenario};
/// use plancast_engine::{MonteCarloDriver, SimulationConfig};
///
/// let scenario = Scenario::new(
///     "premium",
///     "Premium Line",
///     Baseline::per_unit(2018, 13_403.0, 400.0),
///     ParameterSet::new()
///         .with_unit_sales_growth(0.02)
///         .with_price_growth(0.0)
///         .with_cogs_percent(0.46)
///         .with_commission_rate(0.05)
///         .with_ga_percent(0.23),
/// )
/// .with_noise(NoiseSpec::none().with_unit_sales_growth(0.01));
///
/// let config = SimulationConfig::builder()
///     .iterations(1_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let mut driver = MonteCarloDriver::new(config).unwrap();
///
/// let result = driver.run_cumulative(&scenario).unwrap();
/// assert_eq!(result.len(), 1_000);
/// ```
pub struct MonteCarloDriver {
    config: SimulationConfig,
    rng: EngineRng,
}

impl MonteCarloDriver {
    /// Creates a driver from a validated configuration.
    ///
    /// Unseeded configurations draw a seed from OS entropy; the seed in use
    /// is retrievable via [`Self::seed`] so any run can be replayed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed() {
            Some(seed) => EngineRng::from_seed(seed),
            None => EngineRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the seed in use for this driver.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Draws one perturbed assumption set.
    ///
    /// Fields with a configured scale are sampled independently; fields
    /// without one keep the central value exactly, and absent central
    /// fields stay absent.
    fn sample_params(
        rng: &mut EngineRng,
        central: &ParameterSet,
        noise: &NoiseSpec,
    ) -> ParameterSet {
        fn field(rng: &mut EngineRng, central: Option<f64>, scale: Option<f64>) -> Option<f64> {
            match (central, scale) {
                (Some(value), Some(scale)) => Some(rng.sample_normal(value, scale)),
                (central, _) => central,
            }
        }
        ParameterSet {
            sales_growth: field(rng, central.sales_growth, noise.sales_growth),
            unit_sales_growth: field(rng, central.unit_sales_growth, noise.unit_sales_growth),
            price_growth: field(rng, central.price_growth, noise.price_growth),
            cogs_percent: field(rng, central.cogs_percent, noise.cogs_percent),
            commission_rate: field(rng, central.commission_rate, noise.commission_rate),
            ga_percent: field(rng, central.ga_percent, noise.ga_percent),
        }
    }

    /// Runs one iteration: sample, project, reduce to cumulative EBITDA.
    fn cumulative_iteration(
        rng: &mut EngineRng,
        scenario: &Scenario,
        iteration: usize,
    ) -> Result<f64, SimulationError> {
        let sampled = Self::sample_params(rng, &scenario.assumptions, &scenario.noise);
        let path = project(&scenario.baseline, &sampled, scenario.horizon)
            .map_err(|source| SimulationError::Iteration { iteration, source })?;
        Ok(path.iter().map(|p| p.ebitda).sum::<f64>() + scenario.cumulative_adjustment)
    }

    fn validate_horizon(horizon: usize) -> Result<(), ConfigError> {
        if horizon == 0 || horizon > MAX_HORIZON {
            return Err(ConfigError::InvalidHorizon(horizon));
        }
        Ok(())
    }

    /// Runs the cumulative-EBITDA reduction sequentially.
    ///
    /// Produces one cumulative EBITDA value per iteration (the scenario's
    /// adjustment included).
    ///
    /// # Errors
    ///
    /// The first failing iteration aborts the run with a
    /// [`SimulationError::Iteration`] naming it.
    pub fn run_cumulative(
        &mut self,
        scenario: &Scenario,
    ) -> Result<SimulationResult, SimulationError> {
        Self::validate_horizon(scenario.horizon)?;
        let iterations = self.config.iterations();
        info!(
            scenario = %scenario.name,
            iterations,
            horizon = scenario.horizon,
            seed = self.rng.seed(),
            "starting cumulative simulation"
        );
        let started = Instant::now();

        let mut values = Vec::with_capacity(iterations);
        for iteration in 0..iterations {
            values.push(Self::cumulative_iteration(&mut self.rng, scenario, iteration)?);
        }

        debug!(
            scenario = %scenario.name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "cumulative simulation finished"
        );
        Ok(SimulationResult::new(values))
    }

    /// Runs the cumulative-EBITDA reduction across the rayon thread pool.
    ///
    /// Iteration `i` draws from substream `i` of the driver's seed, so the
    /// output is identical for a fixed seed regardless of thread count (and
    /// identical across repeated calls, since the driver's own stream is not
    /// advanced).
    ///
    /// # Errors
    ///
    /// As [`Self::run_cumulative`]; the lowest-indexed failing iteration is
    /// reported.
    pub fn run_cumulative_par(
        &self,
        scenario: &Scenario,
    ) -> Result<SimulationResult, SimulationError> {
        Self::validate_horizon(scenario.horizon)?;
        let iterations = self.config.iterations();
        info!(
            scenario = %scenario.name,
            iterations,
            horizon = scenario.horizon,
            seed = self.rng.seed(),
            "starting parallel cumulative simulation"
        );
        let started = Instant::now();

        let values = (0..iterations)
            .into_par_iter()
            .map(|iteration| {
                let mut rng = self.rng.stream(iteration as u64);
                Self::cumulative_iteration(&mut rng, scenario, iteration)
            })
            .collect::<Result<Vec<f64>, SimulationError>>()?;

        debug!(
            scenario = %scenario.name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "parallel cumulative simulation finished"
        );
        Ok(SimulationResult::new(values))
    }

    /// Runs the by-period reduction sequentially.
    ///
    /// Retains every period of every iteration, grouped by period and
    /// averaged across iterations into expected per-period metrics.
    ///
    /// # Errors
    ///
    /// As [`Self::run_cumulative`].
    pub fn run_by_period(
        &mut self,
        scenario: &Scenario,
    ) -> Result<ByPeriodResult, SimulationError> {
        Self::validate_horizon(scenario.horizon)?;
        let iterations = self.config.iterations();
        info!(
            scenario = %scenario.name,
            iterations,
            horizon = scenario.horizon,
            seed = self.rng.seed(),
            "starting by-period simulation"
        );
        let started = Instant::now();

        let mut accumulators: Vec<PeriodAccumulator> = Vec::with_capacity(scenario.horizon);
        for iteration in 0..iterations {
            let sampled =
                Self::sample_params(&mut self.rng, &scenario.assumptions, &scenario.noise);
            let path = project(&scenario.baseline, &sampled, scenario.horizon)
                .map_err(|source| SimulationError::Iteration { iteration, source })?;
            if accumulators.is_empty() {
                accumulators = path.iter().map(PeriodAccumulator::new).collect();
            } else {
                for (accumulator, period) in accumulators.iter_mut().zip(&path) {
                    accumulator.add(period);
                }
            }
        }

        debug!(
            scenario = %scenario.name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "by-period simulation finished"
        );
        Ok(ByPeriodResult {
            iterations,
            periods: accumulators
                .iter()
                .map(|a| a.means(iterations as f64))
                .collect(),
        })
    }
}

/// Running per-period sums across iterations.
struct PeriodAccumulator {
    year: i32,
    unit_sales: Option<f64>,
    avg_unit_price: Option<f64>,
    sales: f64,
    cogs: f64,
    gross_profit: f64,
    sales_commissions: f64,
    general_and_admin: f64,
    ebitda: f64,
}

impl PeriodAccumulator {
    fn new(period: &PeriodState) -> Self {
        Self {
            year: period.year,
            unit_sales: period.unit_sales,
            avg_unit_price: period.avg_unit_price,
            sales: period.sales,
            cogs: period.cogs,
            gross_profit: period.gross_profit,
            sales_commissions: period.sales_commissions,
            general_and_admin: period.general_and_admin,
            ebitda: period.ebitda,
        }
    }

    fn add(&mut self, period: &PeriodState) {
        if let (Some(sum), Some(value)) = (self.unit_sales.as_mut(), period.unit_sales) {
            *sum += value;
        }
        if let (Some(sum), Some(value)) = (self.avg_unit_price.as_mut(), period.avg_unit_price) {
            *sum += value;
        }
        self.sales += period.sales;
        self.cogs += period.cogs;
        self.gross_profit += period.gross_profit;
        self.sales_commissions += period.sales_commissions;
        self.general_and_admin += period.general_and_admin;
        self.ebitda += period.ebitda;
    }

    fn means(&self, n: f64) -> PeriodMeans {
        PeriodMeans {
            year: self.year,
            unit_sales: self.unit_sales.map(|sum| sum / n),
            avg_unit_price: self.avg_unit_price.map(|sum| sum / n),
            sales: self.sales / n,
            cogs: self.cogs / n,
            gross_profit: self.gross_profit / n,
            sales_commissions: self.sales_commissions / n,
            general_and_admin: self.general_and_admin / n,
            ebitda: self.ebitda / n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use plancast_core::Baseline;

    fn test_scenario() -> Scenario {
        Scenario::new(
            "test",
            "Test Line",
            Baseline::per_unit(2018, 1_000.0, 100.0),
            ParameterSet::new()
                .with_unit_sales_growth(0.1)
                .with_price_growth(0.0)
                .with_cogs_percent(0.5)
                .with_commission_rate(0.05)
                .with_ga_percent(0.2),
        )
    }

    fn driver(iterations: usize, seed: u64) -> MonteCarloDriver {
        let config = SimulationConfig::builder()
            .iterations(iterations)
            .seed(seed)
            .build()
            .unwrap();
        MonteCarloDriver::new(config).unwrap()
    }

    #[test]
    fn test_zero_noise_degenerates_to_deterministic_path() {
        let scenario = test_scenario();
        let deterministic: f64 = project(&scenario.baseline, &scenario.assumptions, 3)
            .unwrap()
            .iter()
            .map(|p| p.ebitda)
            .sum();

        let result = driver(500, 42).run_cumulative(&scenario).unwrap();
        assert_eq!(result.len(), 500);
        assert_eq!(result.std_dev(), 0.0);
        assert_relative_eq!(result.mean(), deterministic, epsilon = 1e-6);
    }

    #[test]
    fn test_cumulative_adjustment_is_applied() {
        let scenario = test_scenario().with_cumulative_adjustment(-500_000.0);
        let plain = test_scenario();

        let adjusted = driver(10, 42).run_cumulative(&scenario).unwrap();
        let unadjusted = driver(10, 42).run_cumulative(&plain).unwrap();
        assert_relative_eq!(
            adjusted.mean(),
            unadjusted.mean() - 500_000.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_noise_spreads_outcomes() {
        let scenario = test_scenario().with_noise(
            NoiseSpec::none()
                .with_unit_sales_growth(0.01)
                .with_cogs_percent(0.01),
        );
        let result = driver(2_000, 42).run_cumulative(&scenario).unwrap();
        assert!(result.std_dev() > 0.0);
    }

    #[test]
    fn test_noise_on_absent_field_is_ignored() {
        // The central assumptions never set sales_growth, so a noise scale
        // on it draws nothing: outcomes must match a fully silent run.
        let noisy = test_scenario().with_noise(NoiseSpec::none().with_sales_growth(0.01));
        let silent = test_scenario();
        let a = driver(50, 7).run_cumulative(&noisy).unwrap();
        let b = driver(50, 7).run_cumulative(&silent).unwrap();
        assert_eq!(a.values(), b.values());
    }

    #[test]
    fn test_parallel_matches_fixed_seed_reruns() {
        let scenario = test_scenario().with_noise(
            NoiseSpec::none()
                .with_unit_sales_growth(0.01)
                .with_price_growth(0.01),
        );
        let first = driver(200, 99).run_cumulative_par(&scenario).unwrap();
        let second = driver(200, 99).run_cumulative_par(&scenario).unwrap();
        assert_eq!(first.values(), second.values());
    }

    #[test]
    fn test_parallel_mean_close_to_sequential() {
        let scenario = test_scenario().with_noise(NoiseSpec::none().with_unit_sales_growth(0.01));
        let sequential = driver(5_000, 1).run_cumulative(&scenario).unwrap();
        let parallel = driver(5_000, 2).run_cumulative_par(&scenario).unwrap();
        let spread = sequential.std_dev().max(parallel.std_dev());
        assert!(
            (sequential.mean() - parallel.mean()).abs() < 10.0 * spread / (5_000f64).sqrt(),
            "sequential mean {} vs parallel mean {}",
            sequential.mean(),
            parallel.mean()
        );
    }

    #[test]
    fn test_by_period_zero_noise_equals_projection() {
        let scenario = test_scenario();
        let expected = project(&scenario.baseline, &scenario.assumptions, 3).unwrap();
        let result = driver(100, 42).run_by_period(&scenario).unwrap();

        assert_eq!(result.iterations, 100);
        assert_eq!(result.periods.len(), 3);
        for (means, period) in result.periods.iter().zip(&expected) {
            assert_eq!(means.year, period.year);
            assert_relative_eq!(means.sales, period.sales, epsilon = 1e-6);
            assert_relative_eq!(means.ebitda, period.ebitda, epsilon = 1e-6);
            assert_relative_eq!(
                means.unit_sales.unwrap(),
                period.unit_sales.unwrap(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_failing_iteration_is_reported() {
        // No assumptions at all: the first iteration cannot resolve a
        // growth driver.
        let scenario = Scenario::new(
            "broken",
            "Broken",
            Baseline::per_unit(2018, 100.0, 10.0),
            ParameterSet::new(),
        );
        let err = driver(10, 42).run_cumulative(&scenario).unwrap_err();
        match err {
            SimulationError::Iteration { iteration, source } => {
                assert_eq!(iteration, 0);
                assert_eq!(
                    source,
                    plancast_core::ProjectionError::MissingParameter {
                        field: "unit_sales_growth",
                        year: 2019
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let scenario = test_scenario().with_horizon(0);
        let err = driver(10, 42).run_cumulative(&scenario).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Config(ConfigError::InvalidHorizon(0))
        ));
    }
}
