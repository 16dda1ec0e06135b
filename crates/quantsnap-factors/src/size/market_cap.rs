//! Market Cap Factor
//!
//! Market capitalization rescaled to trillions so mega-caps land near 1.0
//! instead of saturating the composite. A missing market cap is a neutral
//! 0.0.

use crate::factor::{Factor, FactorCategory};
use crate::vector::FactorName;
use quantsnap_data::{Fundamentals, PriceSeries};
use serde::{Deserialize, Serialize};

/// Configuration for the MarketCap factor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketCapConfig {
    /// Dollar scale divisor (default: 1e12, one trillion)
    pub scale: f64,
}

impl Default for MarketCapConfig {
    fn default() -> Self {
        Self { scale: 1e12 }
    }
}

/// MarketCap computes market capitalization in trillions
#[derive(Debug, Default)]
pub struct MarketCapFactor {
    config: MarketCapConfig,
}

impl MarketCapFactor {
    /// Create the factor with a custom configuration.
    pub const fn with_config(config: MarketCapConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &MarketCapConfig {
        &self.config
    }
}

impl Factor for MarketCapFactor {
    fn name(&self) -> FactorName {
        FactorName::MarketCapFactor
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Size
    }

    fn compute(&self, _series: &PriceSeries, fundamentals: &Fundamentals) -> Option<f64> {
        Some(
            fundamentals
                .market_cap
                .map_or(0.0, |cap| cap / self.config.scale),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::series_from_closes;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mega_cap() {
        let series = series_from_closes(&[100.0]);
        let fundamentals = Fundamentals {
            market_cap: Some(3_000_000_000_000.0),
            ..Fundamentals::new("TEST")
        };

        let value = MarketCapFactor::default()
            .compute(&series, &fundamentals)
            .unwrap();
        assert_abs_diff_eq!(value, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_missing_cap_is_neutral() {
        let series = series_from_closes(&[100.0]);

        let value = MarketCapFactor::default()
            .compute(&series, &Fundamentals::new("TEST"))
            .unwrap();
        assert_abs_diff_eq!(value, 0.0, epsilon = 1e-15);
    }
}
