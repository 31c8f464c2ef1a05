//! Error types for the demand and pricing models.

use thiserror::Error;

/// Demand-model failures.
///
/// The demand curve fails fast on invalid references and on non-positive
/// candidate prices (a real exponent over a non-positive base is undefined).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DemandError {
    /// Reference quantity must be strictly positive.
    #[error("reference quantity {quantity} must be positive")]
    NonPositiveReferenceQuantity {
        /// The offending quantity.
        quantity: f64,
    },

    /// Reference price must be strictly positive.
    #[error("reference price {price} must be positive")]
    NonPositiveReferencePrice {
        /// The offending price.
        price: f64,
    },

    /// Elasticity must be finite and non-negative.
    #[error("elasticity {elasticity} must be finite and non-negative")]
    InvalidElasticity {
        /// The offending elasticity.
        elasticity: f64,
    },

    /// Candidate price must be strictly positive.
    #[error("candidate price {price} must be positive")]
    NonPositivePrice {
        /// The offending candidate price.
        price: f64,
    },
}

/// Price-optimisation failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// The price grid has no points to evaluate.
    #[error("price grid needs at least one point")]
    EmptyGrid,

    /// Grid bounds must be positive and ascending.
    #[error("price grid bounds [{start}, {stop}] must be positive and ascending")]
    InvalidGridBounds {
        /// Lower grid bound.
        start: f64,
        /// Upper grid bound.
        stop: f64,
    },

    /// Demand evaluation failed for a candidate price.
    #[error(transparent)]
    Demand(#[from] DemandError),
}

/// Market-analysis failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    /// The current market share must be strictly positive.
    #[error("current market share {share} must be positive")]
    NonPositiveShare {
        /// The offending share.
        share: f64,
    },

    /// The baseline carries no unit-sales figure to adjust.
    #[error("baseline has no unit sales to adjust")]
    MissingUnitSales,
}
