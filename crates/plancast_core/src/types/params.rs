//! Assumption sets and their perturbation scales.
//!
//! Every field of a [`ParameterSet`] is optional so a partially specified
//! assumption set is explicit rather than an artefact of lookup-miss
//! semantics; the projector resolves absent fields through documented
//! fallback rules. A [`NoiseSpec`] mirrors the same fields with per-field
//! Gaussian scales for Monte Carlo perturbation.

use serde::{Deserialize, Serialize};

/// Growth and margin assumptions driving one projection.
///
/// All fields are dimensionless fractions. Growth rates may be negative;
/// percentage-of-sales fields are expected in [0, 1] but not enforced.
///
/// # Fallback rules (resolved by the projector)
///
/// - `unit_sales_growth` or `price_growth` absent → `sales_growth` is
///   substituted.
/// - An expense percentage absent → the ratio realised in the prior period
///   (prior expense ÷ prior sales) is substituted; if no prior value exists
///   or prior sales is zero, the projection fails.
///
/// # Examples
///
/// ```rust
/// use plancast_core::ParameterSet;
///
/// let assumptions = ParameterSet::new()
///     .with_sales_growth(0.04)
///     .with_unit_sales_growth(0.02)
///     .with_price_growth(0.0)
///     .with_cogs_percent(0.46)
///     .with_commission_rate(0.05)
///     .with_ga_percent(0.23);
///
/// assert_eq!(assumptions.sales_growth, Some(0.04));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Overall annual sales growth; fallback for the specific growth drivers.
    pub sales_growth: Option<f64>,
    /// Annual unit-sales growth.
    pub unit_sales_growth: Option<f64>,
    /// Annual average-price growth.
    pub price_growth: Option<f64>,
    /// Cost of goods sold as a fraction of sales.
    pub cogs_percent: Option<f64>,
    /// Sales commissions as a fraction of sales.
    pub commission_rate: Option<f64>,
    /// General & administrative expense as a fraction of sales.
    pub ga_percent: Option<f64>,
}

impl ParameterSet {
    /// Creates an empty assumption set; every field starts absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the overall sales-growth rate.
    pub fn with_sales_growth(mut self, rate: f64) -> Self {
        self.sales_growth = Some(rate);
        self
    }

    /// Sets the unit-sales growth rate.
    pub fn with_unit_sales_growth(mut self, rate: f64) -> Self {
        self.unit_sales_growth = Some(rate);
        self
    }

    /// Sets the average-price growth rate.
    pub fn with_price_growth(mut self, rate: f64) -> Self {
        self.price_growth = Some(rate);
        self
    }

    /// Sets COGS as a fraction of sales.
    pub fn with_cogs_percent(mut self, fraction: f64) -> Self {
        self.cogs_percent = Some(fraction);
        self
    }

    /// Sets the commission rate on sales.
    pub fn with_commission_rate(mut self, rate: f64) -> Self {
        self.commission_rate = Some(rate);
        self
    }

    /// Sets G&A as a fraction of sales.
    pub fn with_ga_percent(mut self, fraction: f64) -> Self {
        self.ga_percent = Some(fraction);
        self
    }
}

/// Per-field Gaussian noise scales for Monte Carlo perturbation.
///
/// A field with no scale keeps its central value exactly; no noise is
/// applied. Scales are standard deviations in the same dimensionless units
/// as the corresponding [`ParameterSet`] field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSpec {
    /// Scale for `sales_growth`.
    pub sales_growth: Option<f64>,
    /// Scale for `unit_sales_growth`.
    pub unit_sales_growth: Option<f64>,
    /// Scale for `price_growth`.
    pub price_growth: Option<f64>,
    /// Scale for `cogs_percent`.
    pub cogs_percent: Option<f64>,
    /// Scale for `commission_rate`.
    pub commission_rate: Option<f64>,
    /// Scale for `ga_percent`.
    pub ga_percent: Option<f64>,
}

impl NoiseSpec {
    /// A specification with no noise on any field.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the scale for `sales_growth`.
    pub fn with_sales_growth(mut self, scale: f64) -> Self {
        self.sales_growth = Some(scale);
        self
    }

    /// Sets the scale for `unit_sales_growth`.
    pub fn with_unit_sales_growth(mut self, scale: f64) -> Self {
        self.unit_sales_growth = Some(scale);
        self
    }

    /// Sets the scale for `price_growth`.
    pub fn with_price_growth(mut self, scale: f64) -> Self {
        self.price_growth = Some(scale);
        self
    }

    /// Sets the scale for `cogs_percent`.
    pub fn with_cogs_percent(mut self, scale: f64) -> Self {
        self.cogs_percent = Some(scale);
        self
    }

    /// Sets the scale for `commission_rate`.
    pub fn with_commission_rate(mut self, scale: f64) -> Self {
        self.commission_rate = Some(scale);
        self
    }

    /// Sets the scale for `ga_percent`.
    pub fn with_ga_percent(mut self, scale: f64) -> Self {
        self.ga_percent = Some(scale);
        self
    }

    /// Returns true when no field carries a noise scale.
    pub fn is_silent(&self) -> bool {
        self.sales_growth.is_none()
            && self.unit_sales_growth.is_none()
            && self.price_growth.is_none()
            && self.cogs_percent.is_none()
            && self.commission_rate.is_none()
            && self.ga_percent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_parameter_set() {
        let params = ParameterSet::new();
        assert_eq!(params.sales_growth, None);
        assert_eq!(params.cogs_percent, None);
    }

    #[test]
    fn test_builder_chain() {
        let params = ParameterSet::new()
            .with_sales_growth(-0.02)
            .with_cogs_percent(0.47);
        assert_eq!(params.sales_growth, Some(-0.02));
        assert_eq!(params.cogs_percent, Some(0.47));
        assert_eq!(params.commission_rate, None);
    }

    #[test]
    fn test_noise_spec_silent() {
        assert!(NoiseSpec::none().is_silent());
        assert!(!NoiseSpec::none().with_cogs_percent(0.01).is_silent());
    }

    #[test]
    fn test_partial_deserialisation() {
        let params: ParameterSet = serde_json::from_str(r#"{"sales_growth": 0.04}"#).unwrap();
        assert_eq!(params.sales_growth, Some(0.04));
        assert_eq!(params.unit_sales_growth, None);
    }
}
