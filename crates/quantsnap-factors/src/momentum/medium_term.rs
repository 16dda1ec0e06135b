//! Medium-Term Momentum Factor
//!
//! Measures percentage price change over a quarter (~63 trading days).

use crate::factor::{Factor, FactorCategory};
use crate::momentum::trailing_return_pct;
use crate::vector::FactorName;
use quantsnap_data::{Fundamentals, PriceSeries};
use serde::{Deserialize, Serialize};

/// Configuration for the MediumTermMomentum factor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediumTermMomentumConfig {
    /// Lookback window in trading days (default: 63 for ~3 months)
    pub lookback: usize,
}

impl Default for MediumTermMomentumConfig {
    fn default() -> Self {
        Self { lookback: 63 }
    }
}

/// MediumTermMomentum computes price momentum over a 3-month lookback period
#[derive(Debug, Default)]
pub struct MediumTermMomentumFactor {
    config: MediumTermMomentumConfig,
}

impl MediumTermMomentumFactor {
    /// Create the factor with a custom configuration.
    pub const fn with_config(config: MediumTermMomentumConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &MediumTermMomentumConfig {
        &self.config
    }
}

impl Factor for MediumTermMomentumFactor {
    fn name(&self) -> FactorName {
        FactorName::Momentum3M
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
