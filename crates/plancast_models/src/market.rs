//! Market-capture baseline scaling.
//!
//! Market research gives each channel a current share of purchases and a
//! potential share of the addressable market. The capture adjustment scales
//! a baseline unit count by the fraction of that untapped potential the plan
//! assumes it can win:
//!
//! ```text
//! adjusted = units * (1 + capture_rate * (target_share / current_share - 1))
//! ```

use plancast_core::Baseline;

use crate::error::MarketError;

/// Scales a unit count by the captured fraction of untapped share.
///
/// # Errors
///
/// Returns [`MarketError::NonPositiveShare`] when `current_share <= 0`; the
/// expansion factor is undefined without a current foothold.
///
/// # Examples
///
/// ```rust
/// use plancast_models::capture_adjusted_units;
///
/// // Occasional buyers: 18% of purchases today, 52.5% of the potential
/// // market, 30% of the gap assumed capturable.
/// let adjusted = capture_adjusted_units(12_112.0, 0.18, 0.525, 0.30).unwrap();
/// assert!(adjusted > 12_112.0);
/// ```
pub fn capture_adjusted_units(
    current_units: f64,
    current_share: f64,
    target_share: f64,
    capture_rate: f64,
) -> Result<f64, MarketError> {
    if !(current_share > 0.0) {
        return Err(MarketError::NonPositiveShare {
            share: current_share,
        });
    }
    let expansion = target_share / current_share;
    Ok(current_units * (1.0 + capture_rate * (expansion - 1.0)))
}

/// Applies the capture adjustment to a per-unit [`Baseline`].
///
/// Returns a new baseline with scaled unit sales (and re-derived sales); the
/// input is untouched.
///
/// # Errors
///
/// [`MarketError::MissingUnitSales`] when the baseline is aggregate-only, or
/// [`MarketError::NonPositiveShare`] from the share validation.
pub fn capture_adjusted_baseline(
    baseline: &Baseline,
    current_share: f64,
    target_share: f64,
    capture_rate: f64,
) -> Result<Baseline, MarketError> {
    let units = baseline.unit_sales.ok_or(MarketError::MissingUnitSales)?;
    let adjusted = capture_adjusted_units(units, current_share, target_share, capture_rate)?;
    let mut out = *baseline;
    out.unit_sales = Some(adjusted);
    if let Some(price) = out.avg_unit_price {
        out.sales = Some(adjusted * price);
    }
    Ok(out)
}
