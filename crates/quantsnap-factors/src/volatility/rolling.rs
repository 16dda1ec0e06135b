//! Rolling Volatility Factor
//!
//! Sample standard deviation of daily simple returns over a trailing
//! window, annualized by the square root of trading days per year.

use crate::factor::{Factor, FactorCategory};
use crate::stats::{TRADING_DAYS_PER_YEAR, sample_std};
use crate::vector::FactorName;
use quantsnap_data::{Fundamentals, PriceSeries};
use serde::{Deserialize, Serialize};

/// Configuration for the RollingVolatility factor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollingVolatilityConfig {
    /// Return window in trading days (default: 30)
    pub window: usize,
}

impl Default for RollingVolatilityConfig {
    fn default() -> Self {
        Self { window: 30 }
    }
}

/// RollingVolatility computes annualized 30-day realized volatility
#[derive(Debug, Default)]
pub struct RollingVolatilityFactor {
    config: RollingVolatilityConfig,
}

impl RollingVolatilityFactor {
    /// Create the factor with a custom configuration.
    pub const fn with_config(config: RollingVolatilityConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &RollingVolatilityConfig {
        &self.config
    }
}

impl Factor for RollingVolatilityFactor {
    fn name(&self) -> FactorName {
        FactorName::Volatility30D
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Volatility
    }

    fn min_bars(&self) -> usize {
        self.config.window + 1
    }

    fn compute(&self, series: &PriceSeries, _fundamentals: &Fundamentals) -> Option<f64> {
        let returns = series.daily_returns();
        if returns.len() < self.config.window {
            return None;
        }
        let recent = &returns[returns.len() - self.config.window..];
        let std = sample_std(recent)?;
        Some(std * TRADING_DAYS_PER_YEAR.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::series_from_closes;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_constant_series_is_zero() {
        let series = series_from_closes(&vec![100.0; 40]);

        let factor = RollingVolatilityFactor::default();
        let value = factor
            .compute(&series, &Fundamentals::new("TEST"))
            .unwrap();
        assert_abs_diff_eq!(value, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_alternating_returns() {
        // Alternating +1% / -1% daily moves give a stable sample std
        let mut closes = Vec::with_capacity(41);
        let mut price = 100.0;
        closes.push(price);
        for i in 0..40 {
            price *= if i % 2 == 0 { 1.01 } else { 0.99 };
            closes.push(price);
        }
        let series = series_from_closes(&closes);

        let factor = RollingVolatilityFactor::default();
        let value = factor
            .compute(&series, &Fundamentals::new("TEST"))
            .unwrap();

        assert!(value > 0.0);
        assert!(value.is_finite());
    }

    #[test]
    fn test_undefined_when_short() {
        // 30 bars give only 29 returns
        let series = series_from_closes(&vec![100.0; 30]);

        let factor = RollingVolatilityFactor::default();
        assert_eq!(factor.compute(&series, &Fundamentals::new("TEST")), None);
    }
}
