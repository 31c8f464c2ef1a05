//! Error types for the Monte Carlo simulation engine.

use plancast_core::ProjectionError;
use thiserror::Error;

/// Configuration error for the simulation driver.
///
/// These errors occur during construction or run setup when invalid
/// parameters are provided.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Iteration count outside the valid range.
    #[error("invalid iteration count {0}: must be in range [1, 10_000_000]")]
    InvalidIterationCount(usize),

    /// Projection horizon outside the valid range.
    #[error("invalid horizon {0}: must be in range [1, 1_000]")]
    InvalidHorizon(usize),

    /// Invalid parameter value with name and description.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

/// Runtime error from a simulation run.
///
/// There is no per-iteration isolation: the first failing iteration aborts
/// the whole run, and the error reports which iteration (and, through its
/// source, which field and period) triggered the fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A projection inside one iteration failed.
    #[error("iteration {iteration} failed: {source}")]
    Iteration {
        /// Zero-based index of the failing iteration.
        iteration: usize,
        /// The underlying projection fault.
        #[source]
        source: ProjectionError,
    },

    /// The run was configured with invalid parameters.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
