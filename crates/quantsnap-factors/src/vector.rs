//! The per-ticker factor vector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the factors produced by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactorName {
    /// 1-month price momentum, percent.
    #[serde(rename = "momentum_1m")]
    Momentum1M,
    /// 3-month price momentum, percent.
    #[serde(rename = "momentum_3m")]
    Momentum3M,
    /// 50-day regression slope of the adjusted close, scale-free.
    #[serde(rename = "slope_50d")]
    Slope50D,
    /// 30-day annualized volatility of daily returns.
    #[serde(rename = "volatility_30d")]
    Volatility30D,
    /// 3-month annualized Sharpe ratio.
    #[serde(rename = "sharpe_3m")]
    Sharpe3M,
    /// 20-day average dollar volume.
    #[serde(rename = "dollar_volume_20d")]
    DollarVolume20D,
    /// Inverse P/E quality transform.
    #[serde(rename = "pe_quality")]
    PeQuality,
    /// Dividend yield, percent.
    #[serde(rename = "dividend_yield")]
    DividendYield,
    /// Inverse beta stability transform.
    #[serde(rename = "beta_stability")]
    BetaStability,
    /// Market capitalization in trillions.
    #[serde(rename = "market_cap_factor")]
    MarketCapFactor,
}

impl FactorName {
    /// Every factor name, in extractor order.
    pub const ALL: [Self; 10] = [
        Self::Momentum1M,
        Self::Momentum3M,
        Self::Slope50D,
        Self::Volatility30D,
        Self::Sharpe3M,
        Self::DollarVolume20D,
        Self::PeQuality,
        Self::DividendYield,
        Self::BetaStability,
        Self::MarketCapFactor,
    ];

    /// Stable snake_case identifier used in exports and display.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Momentum1M => "momentum_1m",
            Self::Momentum3M => "momentum_3m",
            Self::Slope50D => "slope_50d",
            Self::Volatility30D => "volatility_30d",
            Self::Sharpe3M => "sharpe_3m",
            Self::DollarVolume20D => "dollar_volume_20d",
            Self::PeQuality => "pe_quality",
            Self::DividendYield => "dividend_yield",
            Self::BetaStability => "beta_stability",
            Self::MarketCapFactor => "market_cap_factor",
        }
    }
}

impl fmt::Display for FactorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All factor values for one ticker at one evaluation date.
///
/// `None` marks a factor whose required lookback exceeded the available
/// history. Undefined factors are excluded from weighted sums, never
/// zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorVector {
    /// Ticker symbol.
    pub symbol: String,
    /// 1-month price momentum, percent.
    pub momentum_1m: Option<f64>,
    /// 3-month price momentum, percent.
    pub momentum_3m: Option<f64>,
    /// 50-day regression slope, scale-free.
    pub slope_50d: Option<f64>,
    /// 30-day annualized volatility.
    pub volatility_30d: Option<f64>,
    /// 3-month annualized Sharpe ratio.
    pub sharpe_3m: Option<f64>,
    /// 20-day average dollar volume.
    pub dollar_volume_20d: Option<f64>,
    /// Inverse P/E quality transform.
    pub pe_quality: Option<f64>,
    /// Dividend yield, percent.
    pub dividend_yield: Option<f64>,
    /// Inverse beta stability transform.
    pub beta_stability: Option<f64>,
    /// Market capitalization in trillions.
    pub market_cap_factor: Option<f64>,
}

impl FactorVector {
    /// Create an empty vector with every factor undefined.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            momentum_1m: None,
            momentum_3m: None,
            slope_50d: None,
            volatility_30d: None,
            sharpe_3m: None,
            dollar_volume_20d: None,
            pe_quality: None,
            dividend_yield: None,
            beta_stability: None,
            market_cap_factor: None,
        }
    }

    /// Value of a factor by name.
    pub const fn get(&self, name: FactorName) -> Option<f64> {
        match name {
            FactorName::Momentum1M => self.momentum_1m,
            FactorName::Momentum3M => self.momentum_3m,
            FactorName::Slope50D => self.slope_50d,
            FactorName::Volatility30D => self.volatility_30d,
            FactorName::Sharpe3M => self.sharpe_3m,
            FactorName::DollarVolume20D => self.dollar_volume_20d,
            FactorName::PeQuality => self.pe_quality,
            FactorName::DividendYield => self.dividend_yield,
            FactorName::BetaStability => self.beta_stability,
            FactorName::MarketCapFactor => self.market_cap_factor,
        }
    }

    /// Set a factor value by name.
    pub const fn set(&mut self, name: FactorName, value: Option<f64>) {
        match name {
            FactorName::Momentum1M => self.momentum_1m = value,
            FactorName::Momentum3M => self.momentum_3m = value,
            FactorName::Slope50D => self.slope_50d = value,
            FactorName::Volatility30D => self.volatility_30d = value,
            FactorName::Sharpe3M => self.sharpe_3m = value,
            FactorName::DollarVolume20D => self.dollar_volume_20d = value,
            FactorName::PeQuality => self.pe_quality = value,
            FactorName::DividendYield => self.dividend_yield = value,
            FactorName::BetaStability => self.beta_stability = value,
            FactorName::MarketCapFactor => self.market_cap_factor = value,
        }
    }

    /// Number of defined factors.
    pub fn defined_count(&self) -> usize {
        FactorName::ALL
            .iter()
            .filter(|name| self.get(**name).is_some())
            .count()
    }

    /// Fraction of the factor set that is defined, in [0, 1].
    pub fn coverage(&self) -> f64 {
        self.defined_count() as f64 / FactorName::ALL.len() as f64
    }

    /// Whether every factor is defined.
    pub fn is_complete(&self) -> bool {
        self.defined_count() == FactorName::ALL.len()
    }
}
