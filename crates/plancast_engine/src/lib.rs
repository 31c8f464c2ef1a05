//! # plancast_engine: Projection & Simulation Engine
//!
//! ## Layer 3 (Engine) Role
//!
//! plancast_engine holds the algorithmic core of the workspace:
//! - The income-statement recurrence: [`projector::project_next`] /
//!   [`projector::project`]
//! - The Monte Carlo driver: [`mc::MonteCarloDriver`] with cumulative and
//!   by-period reduction modes, sequential and rayon-parallel loops
//! - The stochastic-elasticity optimal-price study: [`mc::PriceSensitivity`]
//! - Seeded random number generation: [`rng::EngineRng`]
//!
//! ## Purity & Parallelism
//!
//! The recurrence is a pure function: each period is a new immutable value
//! derived from the previous one, and no state is shared between iterations.
//! Every Monte Carlo iteration is therefore independent; the parallel loop
//! gives each iteration its own deterministic RNG substream and collects
//! results append-only, so a fixed seed reproduces the same output
//! regardless of thread count.
//!
//! ## Usage Example
//!
//! ```rust
//! use plancast_core::{Baseline, ParameterSet};
//! use plancast_engine::projector::project;
//!
//! let baseline = Baseline::per_unit(2018, 1_000.0, 100.0);
//! let assumptions = ParameterSet::new()
//!     .with_unit_sales_growth(0.1)
//!     .with_price_growth(0.0)
//!     .with_cogs_percent(0.5)
//!     .with_commission_rate(0.05)
//!     .with_ga_percent(0.2);
//!
//! let path = project(&baseline, &assumptions, 3).unwrap();
//! assert_eq!(path.len(), 3);
//! assert_eq!(path[0].year, 2019);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod projector;
pub mod rng;

// Re-export commonly used items for convenience
pub use mc::{
    ByPeriodResult, MonteCarloDriver, PriceSensitivity, SimulationConfig, SimulationError,
    SimulationResult,
};
pub use projector::{project, project_next, PriorPeriod};
pub use rng::EngineRng;
