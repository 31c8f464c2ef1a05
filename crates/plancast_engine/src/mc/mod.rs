//! Monte Carlo simulation driver.
//!
//! This module provides the orchestration layer for assumption-perturbation
//! simulations:
//! 1. Configuration with validation ([`SimulationConfig`])
//! 2. The iteration loop, sequential or rayon-parallel
//!    ([`MonteCarloDriver`])
//! 3. Reduction into per-iteration scalars or per-period means
//!    ([`SimulationResult`], [`ByPeriodResult`])
//! 4. The stochastic-elasticity optimal-price study ([`PriceSensitivity`])

pub mod config;
pub mod driver;
pub mod error;
pub mod pricing;
pub mod result;

pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_HORIZON, MAX_ITERATIONS};
pub use driver::MonteCarloDriver;
pub use error::{ConfigError, SimulationError};
pub use pricing::PriceSensitivity;
pub use result::{ByPeriodResult, PeriodMeans, SimulationResult, SummaryStats};
