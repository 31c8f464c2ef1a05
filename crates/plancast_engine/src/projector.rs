//! Income-statement projection recurrence.
//!
//! One period advances to the next through a pure function: the prior
//! period's values and the assumption set go in, a new immutable
//! [`PeriodState`] comes out. Nothing is shared between successive calls, so
//! the recurrence can be driven from parallel Monte Carlo iterations without
//! coordination.
//!
//! ## Fallback resolution
//!
//! - `unit_sales_growth` / `price_growth` absent → `sales_growth`.
//! - An expense percentage absent → the ratio realised in the prior period
//!   (prior expense ÷ prior sales). If the prior period carries no such
//!   value, or its sales is zero, projection fails with a
//!   [`ProjectionError`] naming the field and year, never a silent zero.

use plancast_core::{Baseline, ParameterSet, PeriodState, ProjectionError};

/// Explicit view of the period a projection step recurs from.
///
/// Unifies the two possible predecessors (the caller's [`Baseline`] for the
/// first step, a produced [`PeriodState`] thereafter) so
/// [`project_next`] has a single, fully explicit input shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriorPeriod {
    /// Prior period identifier.
    pub year: i32,
    /// Prior units sold, when tracked.
    pub unit_sales: Option<f64>,
    /// Prior average unit price, when tracked.
    pub avg_unit_price: Option<f64>,
    /// Prior revenue.
    pub sales: Option<f64>,
    /// Prior cost of goods sold.
    pub cogs: Option<f64>,
    /// Prior sales commissions.
    pub sales_commissions: Option<f64>,
    /// Prior general & administrative expense.
    pub general_and_admin: Option<f64>,
}

impl From<&Baseline> for PriorPeriod {
    fn from(baseline: &Baseline) -> Self {
        Self {
            year: baseline.year,
            unit_sales: baseline.unit_sales,
            avg_unit_price: baseline.avg_unit_price,
            sales: baseline.sales,
            cogs: baseline.cogs,
            sales_commissions: baseline.sales_commissions,
            general_and_admin: baseline.general_and_admin,
        }
    }
}

impl From<&PeriodState> for PriorPeriod {
    fn from(period: &PeriodState) -> Self {
        Self {
            year: period.year,
            unit_sales: period.unit_sales,
            avg_unit_price: period.avg_unit_price,
            sales: Some(period.sales),
            cogs: Some(period.cogs),
            sales_commissions: Some(period.sales_commissions),
            general_and_admin: Some(period.general_and_admin),
        }
    }
}

/// Resolves an expense percentage: explicit value, or prior-period ratio.
fn ratio_or_fallback(
    explicit: Option<f64>,
    prior_value: Option<f64>,
    prior_sales: Option<f64>,
    field: &'static str,
    year: i32,
) -> Result<f64, ProjectionError> {
    if let Some(fraction) = explicit {
        return Ok(fraction);
    }
    let value = prior_value.ok_or(ProjectionError::MissingParameter { field, year })?;
    let sales = prior_sales.ok_or(ProjectionError::MissingParameter { field, year })?;
    if sales == 0.0 {
        return Err(ProjectionError::ZeroSalesDenominator { field, year });
    }
    Ok(value / sales)
}

/// Advances one period of the income statement.
///
/// # Errors
///
/// Fails fast with a [`ProjectionError`] when a required assumption is
/// absent and no fallback can be computed; the error names the offending
/// field and the year being projected.
pub fn project_next(
    prior: &PriorPeriod,
    params: &ParameterSet,
) -> Result<PeriodState, ProjectionError> {
    let year = prior.year + 1;

    let (unit_sales, avg_unit_price, sales) = match (prior.unit_sales, prior.avg_unit_price) {
        (Some(units), Some(price)) => {
            let unit_growth = params
                .unit_sales_growth
                .or(params.sales_growth)
                .ok_or(ProjectionError::MissingParameter {
                    field: "unit_sales_growth",
                    year,
                })?;
            let price_growth = params
                .price_growth
                .or(params.sales_growth)
                .ok_or(ProjectionError::MissingParameter {
                    field: "price_growth",
                    year,
                })?;
            let units = units * (1.0 + unit_growth);
            let price = price * (1.0 + price_growth);
            (Some(units), Some(price), units * price)
        }
        _ => {
            let growth = params
                .sales_growth
                .ok_or(ProjectionError::MissingParameter {
                    field: "sales_growth",
                    year,
                })?;
            let prior_sales = prior.sales.ok_or(ProjectionError::MissingParameter {
                field: "sales",
                year,
            })?;
            (None, None, prior_sales * (1.0 + growth))
        }
    };

    let cogs_percent = ratio_or_fallback(
        params.cogs_percent,
        prior.cogs,
        prior.sales,
        "cogs_percent",
        year,
    )?;
    let commission_rate = ratio_or_fallback(
        params.commission_rate,
        prior.sales_commissions,
        prior.sales,
        "commission_rate",
        year,
    )?;
    let ga_percent = ratio_or_fallback(
        params.ga_percent,
        prior.general_and_admin,
        prior.sales,
        "ga_percent",
        year,
    )?;

    let cogs = sales * cogs_percent;
    let gross_profit = sales - cogs;
    let sales_commissions = sales * commission_rate;
    let general_and_admin = sales * ga_percent;

    Ok(PeriodState {
        year,
        unit_sales,
        avg_unit_price,
        sales,
        cogs,
        gross_profit,
        sales_commissions,
        general_and_admin,
        ebitda: gross_profit - sales_commissions - general_and_admin,
    })
}

/// Projects a baseline forward over a horizon of periods.
///
/// Returns the ordered sequence of projected states, one per period, each
/// derived from its predecessor under the same assumption set.
///
/// # Errors
///
/// Propagates the first [`ProjectionError`] encountered.
pub fn project(
    baseline: &Baseline,
    params: &ParameterSet,
    horizon: usize,
) -> Result<Vec<PeriodState>, ProjectionError> {
    let mut path = Vec::with_capacity(horizon);
    let mut prior = PriorPeriod::from(baseline);
    for _ in 0..horizon {
        let next = project_next(&prior, params)?;
        prior = PriorPeriod::from(&next);
        path.push(next);
    }
    Ok(path)
}
