//! Factor Registry
//!
//! Central metadata for all available factors. Allows lookup by name or
//! category without instantiating the factor structs.

use crate::factor::FactorCategory;
use crate::vector::FactorName;
use std::collections::HashMap;

/// Factor metadata
#[derive(Debug, Clone)]
pub struct FactorInfo {
    /// Factor identifier
    pub name: FactorName,
    /// Factor category
    pub category: FactorCategory,
    /// Brief description of what the factor measures
    pub description: &'static str,
    /// Minimum price bars required for the factor to be defined
    pub min_bars: usize,
}

/// Get all available factor info
pub fn available_factors() -> Vec<FactorInfo> {
    vec![
        FactorInfo {
            name: FactorName::Momentum1M,
            category: FactorCategory::Momentum,
            description: "1-month trailing price change, percent",
            min_bars: 22,
        },
        FactorInfo {
            name: FactorName::Momentum3M,
            category: FactorCategory::Momentum,
            description: "3-month trailing price change, percent",
            min_bars: 64,
        },
        FactorInfo {
            name: FactorName::Slope50D,
            category: FactorCategory::Trend,
            description: "50-day regression slope normalized by mean price",
            min_bars: 50,
        },
        FactorInfo {
            name: FactorName::Volatility30D,
            category: FactorCategory::Volatility,
            description: "30-day annualized volatility of daily returns",
            min_bars: 31,
        },
        FactorInfo {
            name: FactorName::Sharpe3M,
            category: FactorCategory::RiskAdjusted,
            description: "3-month annualized Sharpe ratio, zero risk-free rate",
            min_bars: 64,
        },
        FactorInfo {
            name: FactorName::DollarVolume20D,
            category: FactorCategory::Liquidity,
            description: "20-day average close times volume",
            min_bars: 20,
        },
        FactorInfo {
            name: FactorName::PeQuality,
            category: FactorCategory::Quality,
            description: "Inverse trailing P/E quality transform",
            min_bars: 0,
        },
        FactorInfo {
            name: FactorName::DividendYield,
            category: FactorCategory::Quality,
            description: "Dividend yield, percent",
            min_bars: 0,
        },
        FactorInfo {
            name: FactorName::BetaStability,
            category: FactorCategory::Quality,
            description: "Inverse beta stability transform",
            min_bars: 0,
        },
        FactorInfo {
            name: FactorName::MarketCapFactor,
            category: FactorCategory::Size,
            description: "Market capitalization in trillions",
            min_bars: 0,
        },
    ]
}

/// Get factors by category
pub fn factors_by_category(category: FactorCategory) -> Vec<FactorInfo> {
    available_factors()
        .into_iter()
        .filter(|f| f.category == category)
        .collect()
}

/// Get factor info by name
pub fn get_factor_info(name: FactorName) -> Option<FactorInfo> {
    available_factors().into_iter().find(|f| f.name == name)
}

/// Count factors by category
pub fn count_by_category() -> HashMap<FactorCategory, usize> {
    let mut counts = HashMap::new();
    for factor in available_factors() {
        *counts.entry(factor.category).or_insert(0) += 1;
    }
    counts
}
