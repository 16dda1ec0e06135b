//! Data pipeline for fetching and preparing universe data.
//!
//! Fetches price history and fundamentals for a list of symbols through
//! the Yahoo providers, with a SQLite cache to avoid repeated API calls.
//! Per-symbol failures are reported and skipped so one bad ticker never
//! blocks the rest of the universe.

use chrono::{DateTime, NaiveDate, Utc};
use indicatif::ProgressBar;
use quantsnap::TickerData;
use quantsnap_data::cache::{SqliteCache, default_cache_path};
use quantsnap_data::error::DataError;
use quantsnap_data::yahoo::{YahooFundamentalsProvider, YahooQuoteProvider};

/// Configuration for data fetching.
#[derive(Debug, Clone)]
pub(crate) struct FetchConfig {
    /// Whether to use the cache.
    pub use_cache: bool,
    /// Whether to force refresh (ignore cached data).
    pub force_refresh: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            use_cache: true,
            force_refresh: false,
        }
    }
}

/// Open the on-disk cache at the default location.
pub(crate) fn open_cache() -> Result<SqliteCache, DataError> {
    SqliteCache::new(default_cache_path())
}

/// Print cache location and contents to stdout.
pub(crate) fn print_cache_info() {
    let path = default_cache_path();
    println!("  Cache: {}", path.display());
    if let Ok(cache) = open_cache()
        && let Ok(stats) = cache.stats()
    {
        println!(
            "  Cached: {} quote rows across {} symbols, {} fundamentals",
            stats.quote_rows, stats.quote_symbols, stats.fundamentals
        );
    }
}

fn to_naive_date(dt: DateTime<Utc>) -> NaiveDate {
    dt.date_naive()
}

/// Fetch one ticker's series and fundamentals, consulting the cache first.
pub(crate) async fn fetch_ticker(
    quotes: &YahooQuoteProvider,
    fundamentals: &YahooFundamentalsProvider,
    cache: Option<&SqliteCache>,
    symbol: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    force_refresh: bool,
) -> Result<TickerData, DataError> {
    let start_date = to_naive_date(start);
    let end_date = to_naive_date(end);

    let series = match cache {
        Some(cache)
            if !force_refresh && cache.has_quotes(symbol, start_date, end_date).unwrap_or(false) =>
        {
            cache.get_series(symbol, start_date, end_date)?
        }
        _ => {
            let series = quotes.fetch_series(symbol, start, end).await?;
            if let Some(cache) = cache {
                cache.put_series(&series)?;
            }
            series
        }
    };

    let fundamentals = match cache {
        Some(cache) if !force_refresh => match cache.get_fundamentals(symbol)? {
            Some(cached) => cached,
            None => {
                let fetched = fundamentals.fetch_fundamentals(symbol).await?;
                cache.put_fundamentals(&fetched)?;
                fetched
            }
        },
        Some(cache) => {
            let fetched = fundamentals.fetch_fundamentals(symbol).await?;
            cache.put_fundamentals(&fetched)?;
            fetched
        }
        None => fundamentals.fetch_fundamentals(symbol).await?,
    };

    Ok(TickerData::new(series, fundamentals))
}

/// Fetch data for a whole universe with an optional progress bar.
///
/// Symbols that fail are skipped with a warning; the error case is only
/// when nothing could be fetched at all.
pub(crate) async fn fetch_universe_with_progress(
    quotes: &YahooQuoteProvider,
    fundamentals: &YahooFundamentalsProvider,
    symbols: &[String],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    config: FetchConfig,
    progress: Option<&ProgressBar>,
) -> Result<Vec<TickerData>, DataError> {
    let cache = if config.use_cache {
        open_cache().ok()
    } else {
        None
    };

    let mut tickers = Vec::with_capacity(symbols.len());

    for symbol in symbols {
        match fetch_ticker(
            quotes,
            fundamentals,
            cache.as_ref(),
            symbol,
            start,
            end,
            config.force_refresh,
        )
        .await
        {
            Ok(data) => tickers.push(data),
            Err(e) => {
                eprintln!("Warning: Skipping {}: {}", symbol, e);
            }
        }
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    if tickers.is_empty() {
        return Err(DataError::MissingData {
            symbol: "batch".to_string(),
            reason: "No data fetched for any symbol".to_string(),
        });
    }

    Ok(tickers)
}
