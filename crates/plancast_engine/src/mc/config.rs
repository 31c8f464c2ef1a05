//! Monte Carlo simulation configuration.

use super::error::ConfigError;

/// Maximum number of iterations allowed.
pub const MAX_ITERATIONS: usize = 10_000_000;

/// Maximum projection horizon allowed, in periods.
pub const MAX_HORIZON: usize = 1_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying the iteration count and optional seed.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use plancast_engine::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .iterations(100_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.iterations(), 100_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Number of independent iterations.
    iterations: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of iterations.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `iterations` is 0 or greater than
    /// [`MAX_ITERATIONS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(ConfigError::InvalidIterationCount(self.iterations));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    iterations: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of iterations, in [1, [`MAX_ITERATIONS`]].
    #[inline]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `iterations` is not set or invalid.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let iterations = self.iterations.ok_or(ConfigError::InvalidParameter {
            name: "iterations",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            iterations,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
