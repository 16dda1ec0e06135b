//! Quote data fetching from Yahoo Finance.

use crate::error::{DataError, Result};
use crate::model::{PriceBar, PriceSeries};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::time::sleep;
use yahoo_finance_api as yahoo;

/// Yahoo Finance quote provider with rate limiting.
pub struct YahooQuoteProvider {
    provider: yahoo::YahooConnector,
    rate_limit_delay: Duration,
}

impl std::fmt::Debug for YahooQuoteProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooQuoteProvider")
            .field("rate_limit_delay", &self.rate_limit_delay)
            .finish_non_exhaustive()
    }
}

impl YahooQuoteProvider {
    /// Create a new Yahoo Finance quote provider with default rate limiting (1 req/sec).
    pub fn new() -> Self {
        Self::with_rate_limit(Duration::from_millis(1000))
    }

    /// Create a new Yahoo Finance quote provider with custom rate limiting.
    pub fn with_rate_limit(rate_limit_delay: Duration) -> Self {
        Self {
            provider: yahoo::YahooConnector::new().expect("Failed to create Yahoo connector"),
            rate_limit_delay,
        }
    }

    /// Fetch daily OHLCV history for a single symbol.
    ///
    /// # Arguments
    /// * `symbol` - The ticker symbol (e.g., "AAPL")
    /// * `start` - Start date for the data
    /// * `end` - End date for the data
    ///
    /// # Returns
    /// A validated [`PriceSeries`] ordered oldest bar first.
    pub async fn fetch_series(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PriceSeries> {
        // Validate date range
        if start > end {
            return Err(DataError::InvalidDateRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }

        // Validate symbol
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        // Convert chrono DateTime to time::OffsetDateTime
        let start_time = time::OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;
        let end_time = time::OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;

        // Fetch data from Yahoo Finance
        let response = self
            .provider
            .get_quote_history(symbol, start_time, end_time)
            .await?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::YahooApi(e.to_string()))?;

        if quotes.is_empty() {
            return Err(DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "No data returned from Yahoo Finance".to_string(),
            });
        }

        let mut bars = Vec::with_capacity(quotes.len());
        for quote in &quotes {
            let date = DateTime::<Utc>::from_timestamp(quote.timestamp as i64, 0)
                .ok_or_else(|| {
                    DataError::TimeConversion(format!("Invalid timestamp {}", quote.timestamp))
                })?
                .date_naive();

            bars.push(PriceBar {
                date,
                open: quote.open,
                high: quote.high,
                low: quote.low,
                close: quote.close,
                adjusted_close: quote.adjclose,
                volume: quote.volume,
            });
        }

        let series = PriceSeries::new(symbol, bars)?;

        // Apply rate limiting
        sleep(self.rate_limit_delay).await;

        Ok(series)
    }

    /// Fetch daily OHLCV history for multiple symbols.
    ///
    /// Symbols that fail are skipped with a warning so one bad ticker does
    /// not prevent the rest of the universe from being fetched.
    pub async fn fetch_series_batch(
        &self,
        symbols: &[String],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PriceSeries>> {
        let mut all = Vec::new();

        for symbol in symbols {
            match self.fetch_series(symbol, start, end).await {
                Ok(series) => all.push(series),
                Err(e) => {
                    eprintln!("Warning: Failed to fetch data for {}: {}", symbol, e);
                    continue;
                }
            }
        }

        if all.is_empty() {
            return Err(DataError::MissingData {
                symbol: "batch".to_string(),
                reason: "No data fetched for any symbol".to_string(),
            });
        }

        Ok(all)
    }
}

impl Default for YahooQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    #[tokio::test]
    async fn test_invalid_date_range() {
        let provider = YahooQuoteProvider::new();
        let start = Utc::now();
        let end = start - ChronoDuration::days(30);

        let result = provider.fetch_series("AAPL", start, end).await;
        assert!(matches!(result, Err(DataError::InvalidDateRange { .. })));
    }

    #[tokio::test]
    async fn test_invalid_symbol() {
        let provider = YahooQuoteProvider::new();
        let end = Utc::now();
        let start = end - ChronoDuration::days(30);

        let result = provider.fetch_series("", start, end).await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }
}
