//! Short-Term Momentum Factor
//!
//! Measures percentage price change over a short lookback period
//! (typically 1 month). Captures recent price trends.

use crate::factor::{Factor, FactorCategory};
use crate::momentum::trailing_return_pct;
use crate::vector::FactorName;
use quantsnap_data::{Fundamentals, PriceSeries};
use serde::{Deserialize, Serialize};

/// Configuration for the ShortTermMomentum factor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortTermMomentumConfig {
    /// Lookback window in trading days (default: 21 for ~1 month)
    pub lookback: usize,
}

impl Default for ShortTermMomentumConfig {
    fn default() -> Self {
        Self { lookback: 21 }
    }
}

/// ShortTermMomentum computes price momentum over a 1-month lookback period
#[derive(Debug, Default)]
pub struct ShortTermMomentumFactor {
    config: ShortTermMomentumConfig,
}

impl ShortTermMomentumFactor {
    /// Create the factor with a custom configuration.
    pub const fn with_config(config: ShortTermMomentumConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &ShortTermMomentumConfig {
        &self.config
    }
}

impl Factor for ShortTermMomentumFactor {
    fn name(&self) -> FactorName {
        FactorName::Momentum1M
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Momentum
    }

    fn min_bars(&self) -> usize {
        self.config.lookback + 1
    }

    fn compute(&self, series: &PriceSeries, _fundamentals: &Fundamentals) -> Option<f64> {
        trailing_return_pct(series, self.config.lookback)
    }
}
