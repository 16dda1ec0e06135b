//! Dividend Yield Factor
//!
//! Pass-through of the fundamental dividend yield in percent; a
//! non-paying or unknown dividend is 0.0.

use crate::factor::{Factor, FactorCategory};
use crate::vector::FactorName;
use quantsnap_data::{Fundamentals, PriceSeries};

/// DividendYield passes the fundamental dividend yield through
#[derive(Debug, Default)]
pub struct DividendYieldFactor;

impl Factor for DividendYieldFactor {
    fn name(&self) -> FactorName {
        FactorName::DividendYield
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Quality
    }

    fn compute(&self, _series: &PriceSeries, fundamentals: &Fundamentals) -> Option<f64> {
        Some(fundamentals.dividend_yield.unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::series_from_closes;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_present_yield() {
        let series = series_from_closes(&[100.0]);
        let fundamentals = Fundamentals {
            dividend_yield: Some(2.5),
            ..Fundamentals::new("TEST")
        };

        let value = DividendYieldFactor
            .compute(&series, &fundamentals)
            .unwrap();
        assert_abs_diff_eq!(value, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_yield_is_neutral() {
        let series = series_from_closes(&[100.0]);

        let value = DividendYieldFactor
            .compute(&series, &Fundamentals::new("TEST"))
            .unwrap();
        assert_abs_diff_eq!(value, 0.0, epsilon = 1e-15);
    }
}
