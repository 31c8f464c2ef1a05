//! CLI error type.

use thiserror::Error;

/// Errors surfaced to the command line.
///
/// Every layer's failure converts into this type; `main` prints the display
/// chain (including sources) and exits non-zero.
#[derive(Error, Debug)]
pub enum CliError {
    /// The requested scenario is not in the catalog.
    #[error("unknown scenario '{0}' (try `plancast list`)")]
    UnknownScenario(String),

    /// The requested pricing study is not in the catalog.
    #[error("no pricing study for scenario '{0}' (try `plancast list`)")]
    UnknownStudy(String),

    /// A scenario file could not be read.
    #[error("failed to read scenario file '{path}'")]
    ScenarioFile {
        /// Path that failed to read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A scenario file could not be parsed.
    #[error("failed to parse scenario file '{path}'")]
    ScenarioParse {
        /// Path that failed to parse.
        path: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The engine rejected the run configuration.
    #[error(transparent)]
    Config(#[from] plancast_engine::mc::ConfigError),

    /// A simulation run failed.
    #[error(transparent)]
    Simulation(#[from] plancast_engine::SimulationError),

    /// A deterministic projection failed.
    #[error(transparent)]
    Projection(#[from] plancast_core::ProjectionError),

    /// A pricing study failed.
    #[error(transparent)]
    Pricing(#[from] plancast_models::PricingError),

    /// JSON report encoding failed.
    #[error("failed to encode report as JSON")]
    Encode(#[from] serde_json::Error),
}

/// Convenience result alias for CLI code.
pub type Result<T> = std::result::Result<T, CliError>;
