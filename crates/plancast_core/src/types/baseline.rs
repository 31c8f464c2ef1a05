//! Baseline seed values for a projection.
//!
//! A [`Baseline`] carries the last observed period: either per-unit economics
//! (unit sales and average price), or an aggregate sales figure, optionally
//! with the period's expense levels so a partially specified assumption set
//! can fall back to realised ratios.

use serde::{Deserialize, Serialize};

/// Starting-period values from which a projection recurs forward.
///
/// Two shapes are supported:
/// - **Per-unit**: `unit_sales` and `avg_unit_price` are present; projected
///   sales are derived as units × price.
/// - **Aggregate**: only `sales` is present; projected sales grow by the
///   overall sales-growth rate.
///
/// The optional expense levels (`cogs`, `sales_commissions`,
/// `general_and_admin`) are only consulted when the assumption set leaves the
/// corresponding percentage unspecified; the first projected period then uses
/// the ratio realised here (expense ÷ `sales`).
///
/// # Examples
///
/// ```rust
/// use plancast_core::Baseline;
///
/// let per_unit = Baseline::per_unit(2018, 101_000.0, 260.0);
/// assert_eq!(per_unit.unit_sales, Some(101_000.0));
///
/// let aggregate = Baseline::aggregate(2018, 26_260_000.0)
///     .with_cogs(12_342_200.0)
///     .with_sales_commissions(1_313_000.0)
///     .with_general_and_admin(6_039_800.0);
/// assert_eq!(aggregate.sales, Some(26_260_000.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// Baseline period identifier (e.g. the last actual fiscal year).
    pub year: i32,
    /// Units sold in the baseline period, if per-unit economics are tracked.
    #[serde(default)]
    pub unit_sales: Option<f64>,
    /// Average realised price per unit, paired with `unit_sales`.
    #[serde(default)]
    pub avg_unit_price: Option<f64>,
    /// Aggregate baseline revenue.
    #[serde(default)]
    pub sales: Option<f64>,
    /// Baseline cost of goods sold, for ratio fallback.
    #[serde(default)]
    pub cogs: Option<f64>,
    /// Baseline sales commissions, for ratio fallback.
    #[serde(default)]
    pub sales_commissions: Option<f64>,
    /// Baseline general & administrative expense, for ratio fallback.
    #[serde(default)]
    pub general_and_admin: Option<f64>,
}

impl Baseline {
    /// Creates a per-unit baseline from unit sales and average price.
    ///
    /// The implied aggregate sales figure is recorded as well, so expense
    /// ratio fallbacks have a denominator for the first projected period.
    pub fn per_unit(year: i32, unit_sales: f64, avg_unit_price: f64) -> Self {
        Self {
            year,
            unit_sales: Some(unit_sales),
            avg_unit_price: Some(avg_unit_price),
            sales: Some(unit_sales * avg_unit_price),
            cogs: None,
            sales_commissions: None,
            general_and_admin: None,
        }
    }

    /// Creates an aggregate baseline from a revenue figure alone.
    pub fn aggregate(year: i32, sales: f64) -> Self {
        Self {
            year,
            unit_sales: None,
            avg_unit_price: None,
            sales: Some(sales),
            cogs: None,
            sales_commissions: None,
            general_and_admin: None,
        }
    }

    /// Records the baseline cost of goods sold.
    pub fn with_cogs(mut self, cogs: f64) -> Self {
        self.cogs = Some(cogs);
        self
    }

    /// Records the baseline sales commissions.
    pub fn with_sales_commissions(mut self, commissions: f64) -> Self {
        self.sales_commissions = Some(commissions);
        self
    }

    /// Records the baseline general & administrative expense.
    pub fn with_general_and_admin(mut self, general_and_admin: f64) -> Self {
        self.general_and_admin = Some(general_and_admin);
        self
    }

    /// Returns true when per-unit economics are available.
    #[inline]
    pub fn has_unit_economics(&self) -> bool {
        self.unit_sales.is_some() && self.avg_unit_price.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_unit_derives_sales() {
        let baseline = Baseline::per_unit(2018, 1_000.0, 250.0);
        assert_eq!(baseline.sales, Some(250_000.0));
        assert!(baseline.has_unit_economics());
    }

    #[test]
    fn test_aggregate_has_no_unit_economics() {
        let baseline = Baseline::aggregate(2018, 26_260_000.0);
        assert!(!baseline.has_unit_economics());
        assert_eq!(baseline.unit_sales, None);
    }

    #[test]
    fn test_expense_builders() {
        let baseline = Baseline::aggregate(2018, 100.0)
            .with_cogs(47.0)
            .with_sales_commissions(5.0)
            .with_general_and_admin(25.0);
        assert_eq!(baseline.cogs, Some(47.0));
        assert_eq!(baseline.sales_commissions, Some(5.0));
        assert_eq!(baseline.general_and_admin, Some(25.0));
    }

    #[test]
    fn test_serde_roundtrip() {
        let baseline = Baseline::per_unit(2018, 7_000.0, 800.0);
        let json = serde_json::to_string(&baseline).unwrap();
        let back: Baseline = serde_json::from_str(&json).unwrap();
        assert_eq!(baseline, back);
    }
}
