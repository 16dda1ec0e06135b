//! Core price and fundamentals data model.
//!
//! A [`PriceSeries`] is the ordered daily bar history for one ticker, and
//! [`Fundamentals`] carries the static company attributes used by the
//! quality factors. Both are plain owned data passed by value between
//! pipeline stages.

use crate::error::{DataError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily OHLCV bar.
///
/// `adjusted_close` accounts for splits and dividends and is the only
/// series used for return computations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Intraday high.
    pub high: f64,
    /// Intraday low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Split/dividend adjusted closing price.
    pub adjusted_close: f64,
    /// Share volume.
    pub volume: u64,
}

/// Ordered daily price history for a single ticker, oldest bar first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Ticker symbol.
    pub symbol: String,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Create a price series, validating that bar dates are strictly
    /// increasing (no duplicates, no out-of-order bars).
    pub fn new(symbol: impl Into<String>, bars: Vec<PriceBar>) -> Result<Self> {
        let symbol = symbol.into();
        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(DataError::NonMonotonicDates {
                    symbol,
                    date: pair[1].date.to_string(),
                });
            }
        }
        Ok(Self { symbol, bars })
    }

    /// All bars, oldest first.
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Number of bars in the series.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the series contains no bars.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Adjusted closing prices, oldest first.
    pub fn adjusted_closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.adjusted_close).collect()
    }

    /// Share volumes, oldest first.
    pub fn volumes(&self) -> Vec<u64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Daily simple returns on the adjusted close, oldest first.
    ///
    /// A return whose prior close is zero is skipped rather than produced
    /// as infinity, so the result may be shorter than `len() - 1`.
    pub fn daily_returns(&self) -> Vec<f64> {
        self.bars
            .windows(2)
            .filter(|pair| pair[0].adjusted_close != 0.0)
            .map(|pair| pair[1].adjusted_close / pair[0].adjusted_close - 1.0)
            .collect()
    }

    /// Most recent closing price, if any bars exist.
    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    /// Most recent bar date, if any bars exist.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|b| b.date)
    }

    /// Percentage change between the last two closes, if at least two bars
    /// exist and the prior close is nonzero.
    pub fn daily_change_pct(&self) -> Option<f64> {
        if self.bars.len() < 2 {
            return None;
        }
        let prev = self.bars[self.bars.len() - 2].close;
        if prev == 0.0 {
            return None;
        }
        let last = self.bars[self.bars.len() - 1].close;
        Some((last / prev - 1.0) * 100.0)
    }
}

/// Static company attributes for one ticker.
///
/// Every field except the symbol is optional; absent fields contribute
/// neutrally to factor computation and never cause a failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Fundamentals {
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    pub name: Option<String>,
    /// Sector classification.
    pub sector: Option<String>,
    /// Market capitalization in dollars.
    pub market_cap: Option<f64>,
    /// Trailing price-to-earnings ratio.
    pub pe_ratio: Option<f64>,
    /// Dividend yield in percent.
    pub dividend_yield: Option<f64>,
    /// Beta versus the market benchmark.
    pub beta: Option<f64>,
}

impl Fundamentals {
    /// Create an empty fundamentals record for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn bar(date: &str, close: f64) -> PriceBar {
        PriceBar {
            date: date.parse().unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            adjusted_close: close,
            volume: 1_000,
        }
    }

    #[test]
    fn test_series_accepts_increasing_dates() {
        let series = PriceSeries::new(
            "AAPL",
            vec![bar("2024-01-02", 100.0), bar("2024-01-03", 101.0)],
        )
        .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.last_close(), Some(101.0));
    }

    #[test]
    fn test_series_rejects_duplicate_dates() {
        let result = PriceSeries::new(
            "AAPL",
            vec![bar("2024-01-02", 100.0), bar("2024-01-02", 101.0)],
        );

        assert!(matches!(result, Err(DataError::NonMonotonicDates { .. })));
    }

    #[test]
    fn test_series_rejects_out_of_order_dates() {
        let result = PriceSeries::new(
            "AAPL",
            vec![bar("2024-01-03", 100.0), bar("2024-01-02", 101.0)],
        );

        assert!(matches!(result, Err(DataError::NonMonotonicDates { .. })));
    }

    #[test]
    fn test_daily_returns() {
        let series = PriceSeries::new(
            "AAPL",
            vec![
                bar("2024-01-02", 100.0),
                bar("2024-01-03", 110.0),
                bar("2024-01-04", 99.0),
            ],
        )
        .unwrap();

        let returns = series.daily_returns();
        assert_eq!(returns.len(), 2);
        assert_abs_diff_eq!(returns[0], 0.10, epsilon = 1e-12);
        assert_abs_diff_eq!(returns[1], -0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_daily_returns_skips_zero_prior_close() {
        let series = PriceSeries::new(
            "JUNK",
            vec![
                PriceBar {
                    adjusted_close: 0.0,
                    ..bar("2024-01-02", 0.0)
                },
                bar("2024-01-03", 5.0),
            ],
        )
        .unwrap();

        assert!(series.daily_returns().is_empty());
    }

    #[test]
    fn test_daily_change_pct() {
        let series = PriceSeries::new(
            "AAPL",
            vec![bar("2024-01-02", 200.0), bar("2024-01-03", 210.0)],
        )
        .unwrap();

        assert_abs_diff_eq!(series.daily_change_pct().unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_series() {
        let series = PriceSeries::new("EMPTY", vec![]).unwrap();

        assert!(series.is_empty());
        assert_eq!(series.last_close(), None);
        assert_eq!(series.daily_change_pct(), None);
        assert!(series.daily_returns().is_empty());
    }

    #[test]
    fn test_fundamentals_default_is_absent() {
        let fundamentals = Fundamentals::new("AAPL");

        assert_eq!(fundamentals.symbol, "AAPL");
        assert!(fundamentals.pe_ratio.is_none());
        assert!(fundamentals.beta.is_none());
    }
}
