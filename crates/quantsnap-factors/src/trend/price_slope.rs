//! Price Slope Factor
//!
//! Ordinary-least-squares slope of the adjusted close against the trading
//! day index over a trailing window, divided by the window's mean price so
//! the value is comparable across price levels.

use crate::factor::{Factor, FactorCategory};
use crate::stats::{mean, ols_slope};
use crate::vector::FactorName;
use quantsnap_data::{Fundamentals, PriceSeries};
use serde::{Deserialize, Serialize};

/// Configuration for the PriceSlope factor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSlopeConfig {
    /// Regression window in trading days (default: 50)
    pub window: usize,
}

impl Default for PriceSlopeConfig {
    fn default() -> Self {
        Self { window: 50 }
    }
}

/// PriceSlope computes the normalized 50-day regression slope of the close
#[derive(Debug, Default)]
pub struct PriceSlopeFactor {
    config: PriceSlopeConfig,
}

impl PriceSlopeFactor {
    /// Create the factor with a custom configuration.
    pub const fn with_config(config: PriceSlopeConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &PriceSlopeConfig {
        &self.config
    }
}

impl Factor for PriceSlopeFactor {
    fn name(&self) -> FactorName {
        FactorName::Slope50D
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Trend
    }

    fn min_bars(&self) -> usize {
        self.config.window
    }

    fn compute(&self, series: &PriceSeries, _fundamentals: &Fundamentals) -> Option<f64> {
        let closes = series.adjusted_closes();
        if closes.len() < self.config.window {
            return None;
        }
        let recent = &closes[closes.len() - self.config.window..];

        let slope = ols_slope(recent)?;
        let mean_price = mean(recent)?;
        if mean_price == 0.0 {
            return None;
        }
        Some(slope / mean_price)
    }
}
