//! Dollar Volume Factor
//!
//! Mean of close × volume over a trailing window, a simple measure of how
//! much money trades in the name each day.

use crate::factor::{Factor, FactorCategory};
use crate::stats::mean;
use crate::vector::FactorName;
use quantsnap_data::{Fundamentals, PriceSeries};
use serde::{Deserialize, Serialize};

/// Configuration for the DollarVolume factor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DollarVolumeConfig {
    /// Averaging window in trading days (default: 20)
    pub window: usize,
}

impl Default for DollarVolumeConfig {
    fn default() -> Self {
        Self { window: 20 }
    }
}

/// DollarVolume computes 20-day average dollar volume
#[derive(Debug, Default)]
pub struct DollarVolumeFactor {
    config: DollarVolumeConfig,
}

impl DollarVolumeFactor {
    /// Create the factor with a custom configuration.
    pub const fn with_config(config: DollarVolumeConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &DollarVolumeConfig {
        &self.config
    }
}

impl Factor for DollarVolumeFactor {
    fn name(&self) -> FactorName {
        FactorName::DollarVolume20D
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Liquidity
    }

    fn min_bars(&self) -> usize {
        self.config.window
    }

    fn compute(&self, series: &PriceSeries, _fundamentals: &Fundamentals) -> Option<f64> {
        let bars = series.bars();
        if bars.len() < self.config.window {
            return None;
        }
        let dollar_volumes: Vec<f64> = bars[bars.len() - self.config.window..]
            .iter()
            .map(|bar| bar.close * bar.volume as f64)
            .collect();
        mean(&dollar_volumes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::series_with_volume;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_constant_dollar_volume() {
        let series = series_with_volume(&vec![50.0; 25], 2_000);

        let factor = DollarVolumeFactor::default();
        let value = factor
            .compute(&series, &Fundamentals::new("TEST"))
            .unwrap();
        assert_abs_diff_eq!(value, 100_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_uses_most_recent_window() {
        // 10 cheap bars then 20 bars at 100.0: only the tail is averaged
        let mut closes = vec![1.0; 10];
        closes.extend(vec![100.0; 20]);
        let series = series_with_volume(&closes, 1_000);

        let factor = DollarVolumeFactor::default();
        let value = factor
            .compute(&series, &Fundamentals::new("TEST"))
            .unwrap();
        assert_abs_diff_eq!(value, 100_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_undefined_when_short() {
        let series = series_with_volume(&vec![50.0; 19], 2_000);

        let factor = DollarVolumeFactor::default();
        assert_eq!(factor.compute(&series, &Fundamentals::new("TEST")), None);
    }
}
