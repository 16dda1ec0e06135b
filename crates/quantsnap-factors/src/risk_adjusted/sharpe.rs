//! Sharpe Ratio Factor
//!
//! Annualized mean daily return over annualized volatility across a
//! trailing quarter, with a zero risk-free rate. A zero-variance window
//! yields 0.0 rather than an infinite or NaN ratio.

use crate::factor::{Factor, FactorCategory};
use crate::stats::{TRADING_DAYS_PER_YEAR, mean, sample_std};
use crate::vector::FactorName;
use quantsnap_data::{Fundamentals, PriceSeries};
use serde::{Deserialize, Serialize};

/// Configuration for the Sharpe factor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharpeConfig {
    /// Return window in trading days (default: 63 for ~3 months)
    pub window: usize,
}

impl Default for SharpeConfig {
    fn default() -> Self {
        Self { window: 63 }
    }
}

/// Sharpe computes the annualized 3-month Sharpe ratio
#[derive(Debug, Default)]
pub struct SharpeFactor {
    config: SharpeConfig,
}

impl SharpeFactor {
    /// Create the factor with a custom configuration.
    pub const fn with_config(config: SharpeConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &SharpeConfig {
        &self.config
    }
}

impl Factor for SharpeFactor {
    fn name(&self) -> FactorName {
        FactorName::Sharpe3M
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::RiskAdjusted
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

        let mean_return = mean(recent)?;
        let std = sample_std(recent)?;
        if std == 0.0 {
            return Some(0.0);
        }

        let annualized_return = mean_return * TRADING_DAYS_PER_YEAR;
        let annualized_vol = std * TRADING_DAYS_PER_YEAR.sqrt();
        Some(annualized_return / annualized_vol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::series_from_closes;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_constant_series_is_zero() {
        let series = series_from_closes(&vec![100.0; 70]);

        let factor = SharpeFactor::default();
        let value = factor
            .compute(&series, &Fundamentals::new("TEST"))
            .unwrap();
        assert_abs_diff_eq!(value, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_positive_drift_is_positive() {
        let closes: Vec<f64> = (0..70)
            .map(|i| 100.0 * (1.0 + 0.001 * (i as f64)) * (1.0 + 0.002 * ((i % 2) as f64)))
            .collect();
        let series = series_from_closes(&closes);

        let factor = SharpeFactor::default();
        let value = factor
            .compute(&series, &Fundamentals::new("TEST"))
            .unwrap();

        assert!(value.is_finite());
        assert!(value > 0.0);
    }

    #[test]
    fn test_undefined_when_short() {
        let series = series_from_closes(&vec![100.0; 63]);

        let factor = SharpeFactor::default();
        assert_eq!(factor.compute(&series, &Fundamentals::new("TEST")), None);
    }
}
