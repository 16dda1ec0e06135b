//! Metrics extraction for a single ticker.
//!
//! Runs the full factor set over one ticker's price history and
//! fundamentals and collects the results into a [`FactorVector`]. Factors
//! whose lookback exceeds the available history come back undefined; a
//! short series never aborts extraction of the remaining factors.

use crate::factor::Factor;
use crate::liquidity::DollarVolumeFactor;
use crate::momentum::{MediumTermMomentumFactor, ShortTermMomentumFactor};
use crate::quality::{BetaStabilityFactor, DividendYieldFactor, PeQualityFactor};
use crate::risk_adjusted::SharpeFactor;
use crate::size::MarketCapFactor;
use crate::trend::PriceSlopeFactor;
use crate::vector::{FactorName, FactorVector};
use crate::volatility::RollingVolatilityFactor;
use quantsnap_data::{Fundamentals, PriceSeries};

/// Engine computing the full factor set for one ticker at a time.
#[derive(Debug, Default)]
pub struct MetricsExtractor {
    short_momentum: ShortTermMomentumFactor,
    medium_momentum: MediumTermMomentumFactor,
    slope: PriceSlopeFactor,
    volatility: RollingVolatilityFactor,
    sharpe: SharpeFactor,
    dollar_volume: DollarVolumeFactor,
    pe_quality: PeQualityFactor,
    dividend_yield: DividendYieldFactor,
    beta_stability: BetaStabilityFactor,
    market_cap: MarketCapFactor,
}

impl MetricsExtractor {
    /// Create an extractor with the default factor configurations.
    pub fn new() -> Self {
        Self::default()
    }

    /// The factors this extractor computes, in extraction order.
    fn factors(&self) -> [&dyn Factor; 10] {
        [
            &self.short_momentum,
            &self.medium_momentum,
            &self.slope,
            &self.volatility,
            &self.sharpe,
            &self.dollar_volume,
            &self.pe_quality,
            &self.dividend_yield,
            &self.beta_stability,
            &self.market_cap,
        ]
    }

    /// Names of the factors this extractor computes.
    pub fn available_factors(&self) -> Vec<FactorName> {
        self.factors().iter().map(|f| f.name()).collect()
    }

    /// Compute every factor for one ticker.
    ///
    /// The vector's symbol is taken from the price series. Price-derived
    /// factors are `None` when the history is shorter than their lookback;
    /// fundamentals-derived factors are always defined, with missing
    /// fields contributing 0.0.
    pub fn extract(&self, series: &PriceSeries, fundamentals: &Fundamentals) -> FactorVector {
        let mut vector = FactorVector::new(series.symbol.clone());
        for factor in self.factors() {
            vector.set(factor.name(), factor.compute(series, fundamentals));
        }
        vector
    }
}
