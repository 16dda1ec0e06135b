//! The factor abstraction.
//!
//! A factor is a pure function from one ticker's price history and
//! fundamentals to a single number. Factors never perform I/O, never read
//! the wall clock, and return `None` when the inputs cannot support the
//! computation, so callers can distinguish "no data" from "no signal".

use crate::vector::FactorName;
use derive_more::Display;
use quantsnap_data::{Fundamentals, PriceSeries};

/// Factor categories, mirroring the layout of the factor modules.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorCategory {
    /// Trailing price momentum (1-month, 3-month).
    #[display("Momentum")]
    Momentum,
    /// Price trend regression (50-day slope).
    #[display("Trend")]
    Trend,
    /// Realized volatility of daily returns.
    #[display("Volatility")]
    Volatility,
    /// Risk-adjusted return (Sharpe ratio).
    #[display("RiskAdjusted")]
    RiskAdjusted,
    /// Trading liquidity (dollar volume).
    #[display("Liquidity")]
    Liquidity,
    /// Fundamental quality (P/E, dividend, beta).
    #[display("Quality")]
    Quality,
    /// Company size (market capitalization).
    #[display("Size")]
    Size,
}

/// A single factor computation over one ticker's inputs.
pub trait Factor {
    /// Identifier of the factor this implementation computes.
    fn name(&self) -> FactorName;

    /// Category the factor belongs to.
    fn category(&self) -> FactorCategory;

    /// Minimum number of price bars required for the factor to be defined.
    /// Fundamentals-only factors require none.
    fn min_bars(&self) -> usize {
        0
    }

    /// Compute the factor value, or `None` when the price history is too
    /// short for the required lookback.
    fn compute(&self, series: &PriceSeries, fundamentals: &Fundamentals) -> Option<f64>;
}
