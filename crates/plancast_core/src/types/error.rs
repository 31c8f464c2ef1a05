//! Error types for structured error handling.
//!
//! This module provides [`ProjectionError`], the failure modes of the
//! income-statement recurrence. Projection fails fast: a zero or NaN result
//! masking an invalid input is never substituted.

use thiserror::Error;

/// Categorised projection failures.
///
/// Each variant names the assumption field and the projected year that
/// triggered the fault, so a failed run reports its exact origin.
///
/// # Examples
///
/// ```
/// use plancast_core::ProjectionError;
///
/// let err = ProjectionError::MissingParameter { field: "sales_growth", year: 2019 };
/// assert!(err.to_string().contains("sales_growth"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// A required assumption is absent and no fallback can be computed.
    #[error("missing assumption '{field}' for year {year} and no prior-period fallback available")]
    MissingParameter {
        /// Name of the absent assumption field.
        field: &'static str,
        /// Year being projected when the fault was detected.
        year: i32,
    },

    /// A prior-ratio fallback is undefined because prior sales is zero.
    #[error("cannot derive '{field}' for year {year}: prior-period sales is zero")]
    ZeroSalesDenominator {
        /// Name of the assumption field whose ratio was requested.
        field: &'static str,
        /// Year being projected when the fault was detected.
        year: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_display() {
        let err = ProjectionError::MissingParameter {
            field: "cogs_percent",
            year: 2020,
        };
        assert_eq!(
            err.to_string(),
            "missing assumption 'cogs_percent' for year 2020 and no prior-period fallback available"
        );
    }

    #[test]
    fn test_zero_denominator_display() {
        let err = ProjectionError::ZeroSalesDenominator {
            field: "ga_percent",
            year: 2019,
        };
        assert!(err.to_string().contains("prior-period sales is zero"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = ProjectionError::MissingParameter {
            field: "sales_growth",
            year: 2019,
        };
        let _: &dyn std::error::Error = &err;
    }
}
