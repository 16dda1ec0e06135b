//! SQLite caching layer for market data.
//!
//! The cache is owned by the caller and injected into the fetch path; the
//! scoring engine itself never touches it. Quotes are keyed by
//! `(symbol, date)` and fundamentals by symbol, each stamped with the time
//! they were cached.

use crate::error::{DataError, Result};
use crate::model::{Fundamentals, PriceBar, PriceSeries};
use chrono::{NaiveDate, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};

/// SQLite cache for market data.
#[derive(Debug)]
pub struct SqliteCache {
    conn: Connection,
}

/// Summary statistics about cache contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached quote rows.
    pub quote_rows: u64,
    /// Number of distinct symbols with cached quotes.
    pub quote_symbols: u64,
    /// Number of cached fundamentals records.
    pub fundamentals: u64,
}

/// Default on-disk cache location under the platform cache directory.
pub fn default_cache_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("quantsnap")
        .join("market_data.db")
}

impl SqliteCache {
    /// Create a new SQLite cache.
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let cache = Self { conn };
        cache.initialize_schema()?;
        Ok(cache)
    }

    /// Create an in-memory cache (useful for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let cache = Self { conn };
        cache.initialize_schema()?;
        Ok(cache)
    }

    /// Initialize the database schema.
    fn initialize_schema(&self) -> Result<()> {
        // Quotes table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS quotes (
                symbol TEXT NOT NULL,
                date TEXT NOT NULL,
                open REAL NOT NULL,
                high REAL NOT NULL,
                low REAL NOT NULL,
                close REAL NOT NULL,
                volume INTEGER NOT NULL,
                adjusted_close REAL NOT NULL,
                cached_at TEXT NOT NULL,
                PRIMARY KEY (symbol, date)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_quotes_symbol_date ON quotes(symbol, date)",
            [],
        )?;

        // Fundamentals table (one JSON record per symbol)
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS fundamentals (
                symbol TEXT PRIMARY KEY,
                data TEXT NOT NULL,
                cached_at TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Check if quotes are cached for a symbol and date range.
    pub fn has_quotes(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM quotes
             WHERE symbol = ?1 AND date >= ?2 AND date <= ?3",
            params![symbol, start.to_string(), end.to_string()],
            |row| row.get(0),
        )?;

        // Check if we have data for most of the expected trading days.
        // Roughly 252 trading days per year, so ~70% of calendar days.
        let days = (end - start).num_days();
        let expected_count = (days as f64 * 0.7 * (252.0 / 365.0)) as i64;

        Ok(count >= expected_count.max(1))
    }

    /// Get a cached price series for a symbol and date range.
    pub fn get_series(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<PriceSeries> {
        let mut stmt = self.conn.prepare(
            "SELECT date, open, high, low, close, volume, adjusted_close
             FROM quotes
             WHERE symbol = ?1 AND date >= ?2 AND date <= ?3
             ORDER BY date ASC",
        )?;

        let rows = stmt.query_map(params![symbol, start.to_string(), end.to_string()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, f64>(4)?,
                row.get::<_, i64>(5)?,
                row.get::<_, f64>(6)?,
            ))
        })?;

        let mut bars = Vec::new();
        for row in rows {
            let (date, open, high, low, close, volume, adjusted_close) = row?;
            let date: NaiveDate = date
                .parse()
                .map_err(|_| DataError::Parse(format!("Invalid cached date: {}", date)))?;
            bars.push(PriceBar {
                date,
                open,
                high,
                low,
                close,
                adjusted_close,
                volume: volume as u64,
            });
        }

        if bars.is_empty() {
            return Err(DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "No cached data found".to_string(),
            });
        }

        PriceSeries::new(symbol, bars)
    }

    /// Store a price series in the cache.
    pub fn put_series(&self, series: &PriceSeries) -> Result<()> {
        let cached_at = Utc::now().to_rfc3339();

        let tx = self.conn.unchecked_transaction()?;

        for bar in series.bars() {
            tx.execute(
                "INSERT OR REPLACE INTO quotes
                 (symbol, date, open, high, low, close, volume, adjusted_close, cached_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    series.symbol,
                    bar.date.to_string(),
                    bar.open,
                    bar.high,
                    bar.low,
                    bar.close,
                    bar.volume as i64,
                    bar.adjusted_close,
                    cached_at
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Get cached fundamentals for a symbol, if present.
    pub fn get_fundamentals(&self, symbol: &str) -> Result<Option<Fundamentals>> {
        let data: Option<String> = self
            .conn
            .query_row(
                "SELECT data FROM fundamentals WHERE symbol = ?1",
                params![symbol],
                |row| row.get(0),
            )
            .optional()?;

        match data {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Store fundamentals in the cache.
    pub fn put_fundamentals(&self, fundamentals: &Fundamentals) -> Result<()> {
        let cached_at = Utc::now().to_rfc3339();
        let data = serde_json::to_string(fundamentals)?;

        self.conn.execute(
            "INSERT OR REPLACE INTO fundamentals (symbol, data, cached_at)
             VALUES (?1, ?2, ?3)",
            params![fundamentals.symbol, data, cached_at],
        )?;

        Ok(())
    }

    /// Summary statistics about cache contents.
    pub fn stats(&self) -> Result<CacheStats> {
        let quote_rows: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM quotes", [], |row| row.get(0))?;
        let quote_symbols: i64 = self.conn.query_row(
            "SELECT COUNT(DISTINCT symbol) FROM quotes",
            [],
            |row| row.get(0),
        )?;
        let fundamentals: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM fundamentals", [], |row| row.get(0))?;

        Ok(CacheStats {
            quote_rows: quote_rows as u64,
            quote_symbols: quote_symbols as u64,
            fundamentals: fundamentals as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(date: &str, close: f64) -> PriceBar {
        PriceBar {
            date: date.parse().unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            adjusted_close: close,
            volume: 500,
        }
    }

    fn sample_series() -> PriceSeries {
        PriceSeries::new(
            "AAPL",
            vec![
                bar("2024-01-02", 100.0),
                bar("2024-01-03", 101.0),
                bar("2024-01-04", 102.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_series_round_trip() {
        let cache = SqliteCache::in_memory().unwrap();
        let series = sample_series();

        cache.put_series(&series).unwrap();

        let start: NaiveDate = "2024-01-01".parse().unwrap();
        let end: NaiveDate = "2024-01-31".parse().unwrap();
        let loaded = cache.get_series("AAPL", start, end).unwrap();

        assert_eq!(loaded, series);
    }

    #[test]
    fn test_get_series_missing_symbol() {
        let cache = SqliteCache::in_memory().unwrap();

        let start: NaiveDate = "2024-01-01".parse().unwrap();
        let end: NaiveDate = "2024-01-31".parse().unwrap();
        let result = cache.get_series("NOPE", start, end);

        assert!(matches!(result, Err(DataError::MissingData { .. })));
    }

    #[test]
    fn test_has_quotes() {
        let cache = SqliteCache::in_memory().unwrap();
        cache.put_series(&sample_series()).unwrap();

        let start: NaiveDate = "2024-01-02".parse().unwrap();
        let end: NaiveDate = "2024-01-04".parse().unwrap();
        assert!(cache.has_quotes("AAPL", start, end).unwrap());
        assert!(!cache.has_quotes("MSFT", start, end).unwrap());
    }

    #[test]
    fn test_fundamentals_round_trip() {
        let cache = SqliteCache::in_memory().unwrap();
        let fundamentals = Fundamentals {
            symbol: "AAPL".to_string(),
            name: Some("Apple Inc.".to_string()),
            sector: Some("Technology".to_string()),
            market_cap: Some(3e12),
            pe_ratio: Some(30.0),
            dividend_yield: Some(0.5),
            beta: Some(1.2),
        };

        cache.put_fundamentals(&fundamentals).unwrap();
        let loaded = cache.get_fundamentals("AAPL").unwrap();

        assert_eq!(loaded, Some(fundamentals));
        assert_eq!(cache.get_fundamentals("MSFT").unwrap(), None);
    }

    #[test]
    fn test_stats() {
        let cache = SqliteCache::in_memory().unwrap();
        cache.put_series(&sample_series()).unwrap();
        cache
            .put_fundamentals(&Fundamentals::new("AAPL"))
            .unwrap();

        let stats = cache.stats().unwrap();
        assert_eq!(stats.quote_rows, 3);
        assert_eq!(stats.quote_symbols, 1);
        assert_eq!(stats.fundamentals, 1);
    }
}
