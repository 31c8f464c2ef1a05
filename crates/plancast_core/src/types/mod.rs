//! Core data model for income-statement projections.
//!
//! This module provides:
//! - [`Baseline`]: the starting-period seed values
//! - [`PeriodState`]: an immutable projected income-statement snapshot
//! - [`ParameterSet`] / [`NoiseSpec`]: assumption sets and perturbation scales
//! - [`Scenario`]: a named (baseline, assumptions, horizon) bundle
//! - [`ProjectionError`]: structured projection failures

pub mod baseline;
pub mod error;
pub mod params;
pub mod period;
pub mod scenario;

pub use baseline::Baseline;
pub use error::ProjectionError;
pub use params::{NoiseSpec, ParameterSet};
pub use period::PeriodState;
pub use scenario::{Scenario, DEFAULT_HORIZON};
