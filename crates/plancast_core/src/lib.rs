//! # plancast_core: Foundation for Scenario Forecasting
//!
//! ## Layer 1 (Foundation) Role
//!
//! plancast_core is the bottom layer of the C-M-E-S architecture, providing:
//! - The income-statement data model: [`Baseline`], [`PeriodState`] (`types`)
//! - Assumption sets and noise specifications: [`ParameterSet`], [`NoiseSpec`]
//! - Named scenario bundles: [`Scenario`]
//! - Shared error types: [`ProjectionError`] (`types::error`)
//! - Descriptive statistics and histogram binning (`stats`)
//! - Currency/unit formatting for report output (`format`)
//!
//! ## Minimal Dependency Principle
//!
//! Layer 1 has no dependencies on other plancast_* crates and keeps external
//! dependencies minimal:
//! - thiserror: structured error types
//! - serde: serialisation of catalog and report types
//!
//! ## Usage Example
//!
//! ```rust
//! use plancast_core::{Baseline, ParameterSet};
//!
//! let baseline = Baseline::per_unit(2018, 101_000.0, 260.0);
//! let assumptions = ParameterSet::new()
//!     .with_unit_sales_growth(0.02)
//!     .with_price_growth(0.0)
//!     .with_cogs_percent(0.47);
//!
//! assert_eq!(baseline.year, 2018);
//! assert_eq!(assumptions.cogs_percent, Some(0.47));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod format;
pub mod stats;
pub mod types;

// Re-export commonly used items for convenience
pub use types::{
    Baseline, NoiseSpec, ParameterSet, PeriodState, ProjectionError, Scenario, DEFAULT_HORIZON,
};
