//! # plancast_models: Demand & Pricing Models
//!
//! ## Layer 2 (Models) Role
//!
//! plancast_models sits above the foundation layer and provides the pricing
//! mathematics the engine samples over:
//! - Constant-elasticity demand: [`DemandCurve`] (`demand`)
//! - Grid-search price optimisation: [`PriceGrid`], [`Objective`],
//!   [`PriceOptimizer`] (`pricing`)
//! - Market-capture baseline scaling (`market`)
//!
//! ## Usage Example
//!
//! ```rust
//! use plancast_models::{DemandCurve, Objective, PriceGrid, PriceOptimizer};
//!
//! let curve = DemandCurve::new(7_000.0, 800.0, 2.25).unwrap();
//! let grid = PriceGrid::new(600.0, 1_000.0, 100).unwrap();
//! let optimizer = PriceOptimizer::new(grid, Objective::Revenue);
//!
//! let optimum = optimizer.optimise(&curve).unwrap();
//! assert!(optimum.price >= 600.0 && optimum.price <= 1_000.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod demand;
pub mod error;
pub mod market;
pub mod pricing;

pub use demand::{DemandCurve, ELASTICITY_FLOOR};
pub use error::{DemandError, MarketError, PricingError};
pub use market::{capture_adjusted_baseline, capture_adjusted_units};
pub use pricing::{Objective, OptimalPrice, PriceGrid, PriceOptimizer};
