//! Projected income-statement snapshots.

use serde::{Deserialize, Serialize};

/// One projected period of the income statement.
///
/// A `PeriodState` is produced once by the projector and never mutated; the
/// next period is always a new value derived from it. The unit-economics
/// fields are present exactly when the originating baseline carried them.
///
/// # Invariants
///
/// - `gross_profit = sales - cogs`
/// - `ebitda = gross_profit - sales_commissions - general_and_admin`
/// - `year` increases by exactly 1 per projected step
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeriodState {
    /// Period identifier.
    pub year: i32,
    /// Units sold, when per-unit economics are tracked.
    pub unit_sales: Option<f64>,
    /// Average realised price per unit, paired with `unit_sales`.
    pub avg_unit_price: Option<f64>,
    /// Revenue for the period.
    pub sales: f64,
    /// Cost of goods sold.
    pub cogs: f64,
    /// `sales - cogs`.
    pub gross_profit: f64,
    /// Commissions paid on sales.
    pub sales_commissions: f64,
    /// General & administrative expense.
    pub general_and_admin: f64,
    /// `gross_profit - sales_commissions - general_and_admin`.
    pub ebitda: f64,
}

impl PeriodState {
    /// EBITDA as a fraction of sales, or `None` when sales is zero.
    pub fn ebitda_margin(&self) -> Option<f64> {
        if self.sales == 0.0 {
            None
        } else {
            Some(self.ebitda / self.sales)
        }
    }

    /// Gross profit as a fraction of sales, or `None` when sales is zero.
    pub fn gross_margin(&self) -> Option<f64> {
        if self.sales == 0.0 {
            None
        } else {
            Some(self.gross_profit / self.sales)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_period() -> PeriodState {
        PeriodState {
            year: 2019,
            unit_sales: Some(1_000.0),
            avg_unit_price: Some(100.0),
            sales: 100_000.0,
            cogs: 47_000.0,
            gross_profit: 53_000.0,
            sales_commissions: 5_000.0,
            general_and_admin: 25_000.0,
            ebitda: 23_000.0,
        }
    }

    #[test]
    fn test_margins() {
        let period = sample_period();
        assert_relative_eq!(period.ebitda_margin().unwrap(), 0.23, epsilon = 1e-12);
        assert_relative_eq!(period.gross_margin().unwrap(), 0.53, epsilon = 1e-12);
    }

    #[test]
    fn test_margins_zero_sales() {
        let period = PeriodState {
            sales: 0.0,
            ..sample_period()
        };
        assert_eq!(period.ebitda_margin(), None);
        assert_eq!(period.gross_margin(), None);
    }
}
