//! Export functionality for leaderboards and score data.
//!
//! Provides CSV and JSON export through a common [`Exporter`] trait, with
//! a flat row representation suitable for spreadsheets.

use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writer finalization error.
    #[error("Writer error: {0}")]
    Writer(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// One flat leaderboard row for CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// Leaderboard position.
    pub rank: Option<usize>,
    /// Ticker symbol.
    pub symbol: String,
    /// Company name.
    pub name: Option<String>,
    /// Sector classification.
    pub sector: Option<String>,
    /// Clamped composite score.
    pub composite_score: f64,
    /// Traditional sub-score.
    pub traditional_score: f64,
    /// Quality sub-score.
    pub quality_score: f64,
    /// 1-month momentum, percent.
    pub momentum_1m: Option<f64>,
    /// 3-month momentum, percent.
    pub momentum_3m: Option<f64>,
    /// 50-day normalized slope.
    pub slope_50d: Option<f64>,
    /// 30-day annualized volatility.
    pub volatility_30d: Option<f64>,
    /// 3-month Sharpe ratio.
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
    /// Fraction of the factor set defined, in [0, 1].
    pub coverage: f64,
    /// Most recent closing price.
    pub last_price: Option<f64>,
    /// Percentage change between the last two closes.
    pub daily_change_pct: Option<f64>,
}

impl From<&LeaderboardEntry> for LeaderboardRow {
    fn from(entry: &LeaderboardEntry) -> Self {
        Self {
            rank: entry.result.rank,
            symbol: entry.result.symbol.clone(),
            name: entry.name.clone(),
            sector: entry.sector.clone(),
            composite_score: entry.result.composite_score,
            traditional_score: entry.result.traditional_score,
            quality_score: entry.result.quality_score,
            momentum_1m: entry.factors.momentum_1m,
            momentum_3m: entry.factors.momentum_3m,
            slope_50d: entry.factors.slope_50d,
            volatility_30d: entry.factors.volatility_30d,
            sharpe_3m: entry.factors.sharpe_3m,
            dollar_volume_20d: entry.factors.dollar_volume_20d,
            pe_quality: entry.factors.pe_quality,
            dividend_yield: entry.factors.dividend_yield,
            beta_stability: entry.factors.beta_stability,
            market_cap_factor: entry.factors.market_cap_factor,
            coverage: entry.coverage(),
            last_price: entry.last_price,
            daily_change_pct: entry.daily_change_pct,
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn csv_from_rows(rows: &[LeaderboardRow]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for row in rows {
        wtr.serialize(row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ExportError::Writer(e.to_string()))
}

impl Exporter for LeaderboardRow {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_from_rows(std::slice::from_ref(self)),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<LeaderboardRow> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_from_rows(self),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Leaderboard {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let rows: Vec<LeaderboardRow> =
                    self.entries.iter().map(LeaderboardRow::from).collect();
                csv_from_rows(&rows)
            }
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantsnap_factors::{FactorName, FactorVector};
    use quantsnap_score::ScoreResult;

    fn entry(symbol: &str, rank: usize, score: f64) -> LeaderboardEntry {
        let mut factors = FactorVector::new(symbol);
        factors.momentum_1m = Some(3.5);
        factors.pe_quality = Some(0.04);

        LeaderboardEntry {
            result: ScoreResult {
                symbol: symbol.to_string(),
                traditional_score: score,
                quality_score: score / 2.0,
                composite_score: score,
                rank: Some(rank),
            },
            factors,
            z_scores: vec![None; FactorName::ALL.len()],
            name: Some(format!("{} Inc", symbol)),
            sector: None,
            last_price: Some(99.5),
            daily_change_pct: None,
        }
    }

    fn board() -> Leaderboard {
        Leaderboard::new(
            "popular_stocks",
            vec![entry("AAPL", 1, 4.0), entry("MSFT", 2, 3.0)],
        )
    }

    #[test]
    fn test_leaderboard_csv() {
        let csv = board().export_to_string(ExportFormat::Csv).unwrap();

        assert!(csv.contains("rank,symbol,name"));
        assert!(csv.contains("AAPL"));
        assert!(csv.contains("MSFT"));
        assert!(csv.contains("3.5"));
    }

    #[test]
    fn test_leaderboard_json() {
        let json = board().export_to_string(ExportFormat::Json).unwrap();

        assert!(json.contains("\"universe\":\"popular_stocks\""));
        assert!(json.contains("\"AAPL\""));
    }

    #[test]
    fn test_leaderboard_pretty_json() {
        let json = board().export_to_string(ExportFormat::PrettyJson).unwrap();

        assert!(json.contains("\"AAPL\""));
        assert!(json.contains("  ")); // Indentation indicates pretty format
    }

    #[test]
    fn test_row_round_trip_via_json() {
        let row = LeaderboardRow::from(&entry("AAPL", 1, 4.0));
        let json = row.export_to_string(ExportFormat::Json).unwrap();
        let loaded: LeaderboardRow = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, row);
    }

    #[test]
    fn test_row_csv_has_undefined_as_empty() {
        let row = LeaderboardRow::from(&entry("AAPL", 1, 4.0));
        let csv = row.export_to_string(ExportFormat::Csv).unwrap();

        // momentum_3m is undefined: consecutive separators, not a zero
        assert!(csv.contains("3.5,,"));
    }

    #[test]
    fn test_export_to_file() {
        use std::io::Read;

        let temp_dir = std::env::temp_dir();
        let csv_path = temp_dir.join("quantsnap_test_export.csv");

        board()
            .export_to_file(&csv_path, ExportFormat::Csv)
            .unwrap();

        let mut contents = String::new();
        File::open(&csv_path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert!(contents.contains("AAPL"));

        std::fs::remove_file(csv_path).ok();
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::PrettyJson.extension(), "json");
    }
}
