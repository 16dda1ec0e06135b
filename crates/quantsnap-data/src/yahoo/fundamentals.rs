//! Fundamental data fetching from Yahoo Finance.

use crate::error::{DataError, Result};
use crate::model::Fundamentals;
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;

const QUOTE_SUMMARY_URL: &str = "https://query2.finance.yahoo.com/v10/finance/quoteSummary";
const MODULES: &str = "price,summaryDetail,assetProfile";

/// Yahoo Finance fundamentals provider.
#[derive(Debug)]
pub struct YahooFundamentalsProvider {
    client: reqwest::Client,
    rate_limit_delay: Duration,
}

impl YahooFundamentalsProvider {
    /// Create a new Yahoo Finance fundamentals provider with default rate
    /// limiting (1 req/sec).
    pub fn new() -> Self {
        Self::with_rate_limit(Duration::from_millis(1000))
    }

    /// Create a new provider with custom rate limiting.
    pub fn with_rate_limit(rate_limit_delay: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)")
                .build()
                .expect("Failed to create HTTP client"),
            rate_limit_delay,
        }
    }

    /// Fetch fundamental data for a single symbol from the quoteSummary API.
    ///
    /// Fields Yahoo does not report for a symbol are left absent; the
    /// scoring engine treats them as neutral contributions.
    pub async fn fetch_fundamentals(&self, symbol: &str) -> Result<Fundamentals> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let url = format!(
            "{}/{}?modules={}",
            QUOTE_SUMMARY_URL, symbol, MODULES
        );
        let body: Value = self.client.get(&url).send().await?.json().await?;

        // Apply rate limiting
        sleep(self.rate_limit_delay).await;

        let result = body
            .pointer("/quoteSummary/result/0")
            .ok_or_else(|| DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "Empty quoteSummary response".to_string(),
            })?;

        Ok(parse_quote_summary(symbol, result))
    }

    /// Fetch fundamental data for multiple symbols.
    ///
    /// Symbols that fail are returned as empty records with a warning, so
    /// missing fundamentals never block ranking on price factors alone.
    pub async fn fetch_fundamentals_batch(&self, symbols: &[String]) -> Vec<Fundamentals> {
        let mut all = Vec::with_capacity(symbols.len());

        for symbol in symbols {
            match self.fetch_fundamentals(symbol).await {
                Ok(data) => all.push(data),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to fetch fundamentals for {}: {}",
                        symbol, e
                    );
                    all.push(Fundamentals::new(symbol.clone()));
                }
            }
        }

        all
    }
}

impl Default for YahooFundamentalsProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract a `{ "raw": f64 }` field from a quoteSummary module.
fn raw_f64(module: &Value, field: &str) -> Option<f64> {
    module.get(field)?.get("raw")?.as_f64()
}

/// Map a quoteSummary result object onto a [`Fundamentals`] record.
fn parse_quote_summary(symbol: &str, result: &Value) -> Fundamentals {
    let price = result.get("price");
    let summary = result.get("summaryDetail");
    let profile = result.get("assetProfile");

    let name = price
        .and_then(|p| p.get("longName").or_else(|| p.get("shortName")))
        .and_then(Value::as_str)
        .map(str::to_string);
    let sector = profile
        .and_then(|p| p.get("sector"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let market_cap = price.and_then(|p| raw_f64(p, "marketCap"));
    let pe_ratio = summary.and_then(|s| raw_f64(s, "trailingPE"));
    // Yahoo reports the yield as a fraction; the model carries percent.
    let dividend_yield = summary
        .and_then(|s| raw_f64(s, "dividendYield"))
        .map(|y| y * 100.0);
    let beta = summary.and_then(|s| raw_f64(s, "beta"));

    Fundamentals {
        symbol: symbol.to_string(),
        name,
        sector,
        market_cap,
        pe_ratio,
        dividend_yield,
        beta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_invalid_symbol() {
        let provider = YahooFundamentalsProvider::new();
        let result = provider.fetch_fundamentals("").await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }

    #[test]
    fn test_parse_quote_summary() {
        let result = json!({
            "price": {
                "longName": "Apple Inc.",
                "marketCap": { "raw": 3_000_000_000_000.0_f64 }
            },
            "summaryDetail": {
                "trailingPE": { "raw": 30.0 },
                "dividendYield": { "raw": 0.005 },
                "beta": { "raw": 1.2 }
            },
            "assetProfile": {
                "sector": "Technology"
            }
        });

        let fundamentals = parse_quote_summary("AAPL", &result);

        assert_eq!(fundamentals.symbol, "AAPL");
        assert_eq!(fundamentals.name.as_deref(), Some("Apple Inc."));
        assert_eq!(fundamentals.sector.as_deref(), Some("Technology"));
        assert_abs_diff_eq!(fundamentals.pe_ratio.unwrap(), 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fundamentals.dividend_yield.unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(fundamentals.beta.unwrap(), 1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_quote_summary_missing_fields() {
        let result = json!({ "price": { "shortName": "Mystery Corp" } });

        let fundamentals = parse_quote_summary("MYST", &result);

        assert_eq!(fundamentals.name.as_deref(), Some("Mystery Corp"));
        assert!(fundamentals.sector.is_none());
        assert!(fundamentals.market_cap.is_none());
        assert!(fundamentals.pe_ratio.is_none());
        assert!(fundamentals.dividend_yield.is_none());
        assert!(fundamentals.beta.is_none());
    }
}
