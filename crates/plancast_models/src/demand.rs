//! Constant-elasticity demand model.
//!
//! Predicted demand follows the constant-elasticity form:
//! ```text
//! Q = Q0 * (P0 / P)^e
//! ```
//! where:
//! - Q0 = reference quantity (units sold at the reference price)
//! - P0 = reference price
//! - P  = candidate price
//! - e  = elasticity (>= 0; higher means a steeper demand drop above P0)
//!
//! At `P = P0` the curve returns exactly `Q0`.

use serde::{Deserialize, Serialize};

use crate::error::DemandError;

/// Lower bound applied to sampled elasticities.
///
/// A sampled elasticity at or below zero would make the demand response flat
/// or inverted; [`DemandCurve::with_sampled_elasticity`] clamps such draws to
/// this floor instead of propagating an error.
pub const ELASTICITY_FLOOR: f64 = 0.1;

/// A constant-elasticity price-demand curve anchored at a reference point.
///
/// # Examples
///
/// ```rust
/// use plancast_models::DemandCurve;
///
/// let curve = DemandCurve::new(72_000.0, 65.0, 2.0).unwrap();
///
/// // Demand at the reference price equals the reference quantity.
/// let q = curve.quantity_at(65.0).unwrap();
/// assert!((q - 72_000.0).abs() < 1e-9);
///
/// // Demand falls as price rises.
/// assert!(curve.quantity_at(80.0).unwrap() < 72_000.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemandCurve {
    reference_quantity: f64,
    reference_price: f64,
    elasticity: f64,
}

impl DemandCurve {
    /// Creates a curve from a reference point and elasticity.
    ///
    /// # Errors
    ///
    /// Returns a [`DemandError`] when the reference quantity or price is not
    /// strictly positive, or the elasticity is negative or non-finite.
    pub fn new(
        reference_quantity: f64,
        reference_price: f64,
        elasticity: f64,
    ) -> Result<Self, DemandError> {
        if !(reference_quantity > 0.0) {
            return Err(DemandError::NonPositiveReferenceQuantity {
                quantity: reference_quantity,
            });
        }
        if !(reference_price > 0.0) {
            return Err(DemandError::NonPositiveReferencePrice {
                price: reference_price,
            });
        }
        if !elasticity.is_finite() || elasticity < 0.0 {
            return Err(DemandError::InvalidElasticity { elasticity });
        }
        Ok(Self {
            reference_quantity,
            reference_price,
            elasticity,
        })
    }

    /// Reference quantity `Q0`.
    #[inline]
    pub fn reference_quantity(&self) -> f64 {
        self.reference_quantity
    }

    /// Reference price `P0`.
    #[inline]
    pub fn reference_price(&self) -> f64 {
        self.reference_price
    }

    /// Elasticity exponent `e`.
    #[inline]
    pub fn elasticity(&self) -> f64 {
        self.elasticity
    }

    /// Predicted demand at a candidate price.
    ///
    /// # Errors
    ///
    /// Fails fast with [`DemandError::NonPositivePrice`] when `price <= 0`;
    /// the curve never coerces an undefined response to zero.
    pub fn quantity_at(&self, price: f64) -> Result<f64, DemandError> {
        if !(price > 0.0) {
            return Err(DemandError::NonPositivePrice { price });
        }
        Ok(self.reference_quantity * (self.reference_price / price).powf(self.elasticity))
    }

    /// Predicted demand for a sequence of candidate prices, element-wise.
    ///
    /// # Errors
    ///
    /// Fails on the first non-positive candidate.
    pub fn quantities_at(&self, prices: &[f64]) -> Result<Vec<f64>, DemandError> {
        prices.iter().map(|&p| self.quantity_at(p)).collect()
    }

    /// Returns a copy of the curve with a sampled elasticity.
    ///
    /// Draws at or below [`ELASTICITY_FLOOR`] are clamped to the floor; this
    /// is documented behaviour for the stochastic pricing study, not a fault.
    pub fn with_sampled_elasticity(&self, elasticity: f64) -> Self {
        Self {
            elasticity: elasticity.max(ELASTICITY_FLOOR),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_reference_point_identity() {
        let curve = DemandCurve::new(17_170.0, 260.0, 1.5).unwrap();
        assert_relative_eq!(curve.quantity_at(260.0).unwrap(), 17_170.0, epsilon = 1e-9);
    }

    #[test]
    fn test_demand_falls_above_reference() {
        let curve = DemandCurve::new(7_000.0, 800.0, 2.25).unwrap();
        assert!(curve.quantity_at(1_000.0).unwrap() < 7_000.0);
        assert!(curve.quantity_at(600.0).unwrap() > 7_000.0);
    }

    #[test]
    fn test_known_value() {
        // Q = 100 * (100 / 200)^1 = 50
        let curve = DemandCurve::new(100.0, 100.0, 1.0).unwrap();
        assert_relative_eq!(curve.quantity_at(200.0).unwrap(), 50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let curve = DemandCurve::new(100.0, 100.0, 1.0).unwrap();
        assert!(matches!(
            curve.quantity_at(0.0),
            Err(DemandError::NonPositivePrice { .. })
        ));
        assert!(matches!(
            curve.quantity_at(-10.0),
            Err(DemandError::NonPositivePrice { .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_references() {
        assert!(DemandCurve::new(0.0, 100.0, 1.0).is_err());
        assert!(DemandCurve::new(100.0, 0.0, 1.0).is_err());
        assert!(DemandCurve::new(100.0, 100.0, -0.5).is_err());
        assert!(DemandCurve::new(100.0, 100.0, f64::NAN).is_err());
    }

    #[test]
    fn test_elementwise_matches_scalar() {
        let curve = DemandCurve::new(7_000.0, 800.0, 2.25).unwrap();
        let prices = [600.0, 800.0, 1_000.0];
        let quantities = curve.quantities_at(&prices).unwrap();
        for (&p, &q) in prices.iter().zip(&quantities) {
            assert_relative_eq!(q, curve.quantity_at(p).unwrap());
        }
        assert!(curve.quantities_at(&[800.0, -1.0]).is_err());
    }

    #[test]
    fn test_sampled_elasticity_clamped_to_floor() {
        let curve = DemandCurve::new(100.0, 100.0, 1.5).unwrap();
        assert_eq!(curve.with_sampled_elasticity(-0.3).elasticity(), ELASTICITY_FLOOR);
        assert_eq!(curve.with_sampled_elasticity(0.0).elasticity(), ELASTICITY_FLOOR);
        assert_eq!(curve.with_sampled_elasticity(1.8).elasticity(), 1.8);
    }

    proptest! {
        #[test]
        fn prop_reference_identity(
            q0 in 1.0f64..1e6,
            p0 in 0.01f64..1e4,
            e in 0.0f64..10.0,
        ) {
            let curve = DemandCurve::new(q0, p0, e).unwrap();
            let q = curve.quantity_at(p0).unwrap();
            prop_assert!((q - q0).abs() <= 1e-9 * q0);
        }

        #[test]
        fn prop_higher_elasticity_steeper_drop(
            q0 in 1.0f64..1e6,
            p0 in 1.0f64..1e3,
            e1 in 0.1f64..2.0,
            bump in 0.1f64..2.0,
            premium in 1.01f64..5.0,
        ) {
            let e2 = e1 + bump;
            let p = p0 * premium;
            let low = DemandCurve::new(q0, p0, e1).unwrap().quantity_at(p).unwrap();
            let high = DemandCurve::new(q0, p0, e2).unwrap().quantity_at(p).unwrap();
            prop_assert!(high < low);
        }
    }
}
