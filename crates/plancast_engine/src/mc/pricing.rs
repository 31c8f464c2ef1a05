//! Stochastic-elasticity optimal-price study.
//!
//! A sensitivity analysis of the pricing decision to uncertain elasticity:
//! each iteration samples an elasticity from a Gaussian centred on the
//! curve's own value, clamps it to the documented floor, re-runs the grid
//! search and records the winning price. The distribution of those optimal
//! prices (its mean and standard deviation in particular) is the output.

use tracing::info;

use plancast_models::{DemandCurve, PriceOptimizer, PricingError};

use super::config::MAX_ITERATIONS;
use super::error::ConfigError;
use super::result::SimulationResult;
use crate::rng::EngineRng;

/// Configuration for the stochastic-elasticity price study.
///
/// # Examples
///
/// ```rust
/// use plancast_engine::{EngineRng, PriceSensitivity};
/// use plancast_models::{DemandCurve, Objective, PriceGrid, PriceOptimizer};
///
/// let curve = DemandCurve::new(17_170.0, 260.0, 1.5).unwrap();
/// let grid = PriceGrid::new(200.0, 600.0, 100).unwrap();
/// let optimizer = PriceOptimizer::new(grid, Objective::Revenue);
///
/// let study = PriceSensitivity::new(1_000, 0.2).unwrap();
/// let mut rng = EngineRng::from_seed(42);
/// let prices = study.run(&optimizer, &curve, &mut rng).unwrap();
/// assert_eq!(prices.len(), 1_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceSensitivity {
    iterations: usize,
    elasticity_std: f64,
}

impl PriceSensitivity {
    /// Creates a study configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the iteration count is outside
    /// [1, [`MAX_ITERATIONS`]] or the elasticity scale is negative or
    /// non-finite.
    pub fn new(iterations: usize, elasticity_std: f64) -> Result<Self, ConfigError> {
        if iterations == 0 || iterations > MAX_ITERATIONS {
            return Err(ConfigError::InvalidIterationCount(iterations));
        }
        if !elasticity_std.is_finite() || elasticity_std < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "elasticity_std",
                value: format!("{elasticity_std} is not a valid scale"),
            });
        }
        Ok(Self {
            iterations,
            elasticity_std,
        })
    }

    /// Number of elasticity draws.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Standard deviation of the elasticity draws.
    #[inline]
    pub fn elasticity_std(&self) -> f64 {
        self.elasticity_std
    }

    /// Runs the study and collects the optimal price per draw.
    ///
    /// # Errors
    ///
    /// Propagates [`PricingError`] from the grid search.
    pub fn run(
        &self,
        optimizer: &PriceOptimizer,
        curve: &DemandCurve,
        rng: &mut EngineRng,
    ) -> Result<SimulationResult, PricingError> {
        info!(
            iterations = self.iterations,
            elasticity_mean = curve.elasticity(),
            elasticity_std = self.elasticity_std,
            seed = rng.seed(),
            "starting elasticity sensitivity study"
        );
        let mut values = Vec::with_capacity(self.iterations);
        for _ in 0..self.iterations {
            let draw = rng.sample_normal(curve.elasticity(), self.elasticity_std);
            let sampled = curve.with_sampled_elasticity(draw);
            values.push(optimizer.optimise(&sampled)?.price);
        }
        Ok(SimulationResult::new(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use plancast_models::{Objective, PriceGrid};

    fn occasional_study() -> (PriceOptimizer, DemandCurve) {
        let curve = DemandCurve::new(17_170.0, 260.0, 1.5).unwrap();
        let grid = PriceGrid::new(200.0, 600.0, 100).unwrap();
        (PriceOptimizer::new(grid, Objective::Revenue), curve)
    }

    #[test]
    fn test_zero_scale_collapses_to_deterministic_optimum() {
        let (optimizer, curve) = occasional_study();
        let deterministic = optimizer.optimise(&curve).unwrap().price;

        let study = PriceSensitivity::new(100, 0.0).unwrap();
        let mut rng = EngineRng::from_seed(42);
        let prices = study.run(&optimizer, &curve, &mut rng).unwrap();

        assert_eq!(prices.std_dev(), 0.0);
        assert_relative_eq!(prices.mean(), deterministic);
    }

    #[test]
    fn test_sampled_prices_stay_on_grid() {
        let (optimizer, curve) = occasional_study();
        let study = PriceSensitivity::new(500, 0.2).unwrap();
        let mut rng = EngineRng::from_seed(7);
        let prices = study.run(&optimizer, &curve, &mut rng).unwrap();
        for &p in prices.values() {
            assert!((200.0..=600.0).contains(&p));
        }
    }

    #[test]
    fn test_uncertain_elasticity_spreads_the_optimum() {
        // With e ~ N(1.5, 0.2), draws below 1 push the revenue optimum to
        // the top of the grid while draws above 1 pull it to the bottom.
        let (optimizer, curve) = occasional_study();
        let study = PriceSensitivity::new(2_000, 0.2).unwrap();
        let mut rng = EngineRng::from_seed(11);
        let prices = study.run(&optimizer, &curve, &mut rng).unwrap();
        assert!(prices.std_dev() > 0.0);
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        assert!(PriceSensitivity::new(0, 0.2).is_err());
        assert!(PriceSensitivity::new(100, -0.1).is_err());
        assert!(PriceSensitivity::new(100, f64::NAN).is_err());
    }

    #[test]
    fn test_fixed_seed_reproducible() {
        let (optimizer, curve) = occasional_study();
        let study = PriceSensitivity::new(200, 0.2).unwrap();
        let a = study
            .run(&optimizer, &curve, &mut EngineRng::from_seed(3))
            .unwrap();
        let b = study
            .run(&optimizer, &curve, &mut EngineRng::from_seed(3))
            .unwrap();
        assert_eq!(a.values(), b.values());
    }
}
