//! Per-ticker report generation.
//!
//! A [`TickerReport`] pairs one ticker's score with the factor values that
//! produced it, for terminal display or JSON hand-off to a narrative or
//! dashboard layer.

use chrono::{DateTime, Utc};
use quantsnap_factors::{FactorName, FactorVector};
use quantsnap_score::ScoreResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The builder was missing its score result.
    #[error("Report for {symbol} is missing a score result")]
    MissingResult {
        /// Symbol the report was built for.
        symbol: String,
    },
}

/// A score breakdown report for a single ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerReport {
    /// Ticker symbol.
    pub symbol: String,

    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,

    /// Scores for the ticker.
    pub result: ScoreResult,

    /// Factor values behind the score.
    pub factors: FactorVector,

    /// Company name, when known.
    pub name: Option<String>,

    /// Sector classification, when known.
    pub sector: Option<String>,
}

impl TickerReport {
    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\nScore Report: {}", self.symbol));
        if let Some(name) = &self.name {
            output.push_str(&format!(" ({})", name));
        }
        output.push('\n');
        if let Some(sector) = &self.sector {
            output.push_str(&format!("Sector: {}\n", sector));
        }
        output.push_str(&format!(
            "Generated: {}\n",
            self.timestamp.format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "  Composite Score:    {:>10.3}\n",
            self.result.composite_score
        ));
        output.push_str(&format!(
            "  Traditional Score:  {:>10.3}\n",
            self.result.traditional_score
        ));
        output.push_str(&format!(
            "  Quality Score:      {:>10.3}\n",
            self.result.quality_score
        ));
        if let Some(rank) = self.result.rank {
            output.push_str(&format!("  Rank:               {:>10}\n", rank));
        }

        output.push_str("\nFactors:\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for name in FactorName::ALL {
            let value = self
                .factors
                .get(name)
                .map_or_else(|| "undefined".to_string(), |v| format!("{:.4}", v));
            output.push_str(&format!("  {:<20} {:>14}\n", name.to_string(), value));
        }

        output.push_str(&"=".repeat(60));
        output.push('\n');

        output
    }
}

impl fmt::Display for TickerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.result)
    }
}

/// Builder for creating ticker reports.
#[derive(Debug, Default)]
pub struct TickerReportBuilder {
    symbol: Option<String>,
    result: Option<ScoreResult>,
    factors: Option<FactorVector>,
    name: Option<String>,
    sector: Option<String>,
}

impl TickerReportBuilder {
    /// Create a new report builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score result.
    pub fn result(mut self, result: ScoreResult) -> Self {
        self.symbol = Some(result.symbol.clone());
        self.result = Some(result);
        self
    }

    /// Set the factor values.
    pub fn factors(mut self, factors: FactorVector) -> Self {
        self.factors = Some(factors);
        self
    }

    /// Set the company name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the sector classification.
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Build the report.
    pub fn build(self) -> Result<TickerReport, ReportError> {
        let result = self.result.ok_or_else(|| ReportError::MissingResult {
            symbol: self.symbol.clone().unwrap_or_default(),
        })?;
        let symbol = result.symbol.clone();
        let factors = self
            .factors
            .unwrap_or_else(|| FactorVector::new(symbol.clone()));

        Ok(TickerReport {
            symbol,
            timestamp: Utc::now(),
            result,
            factors,
            name: self.name,
            sector: self.sector,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ScoreResult {
        ScoreResult {
            symbol: "AAPL".to_string(),
            traditional_score: 3.2,
            quality_score: 0.8,
            composite_score: 2.4,
            rank: Some(1),
        }
    }

    #[test]
    fn test_report_builder() {
        let mut factors = FactorVector::new("AAPL");
        factors.momentum_1m = Some(5.0);

        let report = TickerReportBuilder::new()
            .result(sample_result())
            .factors(factors)
            .name("Apple Inc.")
            .sector("Technology")
            .build()
            .unwrap();

        assert_eq!(report.symbol, "AAPL");
        assert_eq!(report.name.as_deref(), Some("Apple Inc."));
        assert_eq!(report.result.rank, Some(1));
    }

    #[test]
    fn test_builder_requires_result() {
        let result = TickerReportBuilder::new().build();
        assert!(matches!(result, Err(ReportError::MissingResult { .. })));
    }

    #[test]
    fn test_ascii_table_marks_undefined() {
        let mut factors = FactorVector::new("AAPL");
        factors.momentum_1m = Some(5.0);

        let report = TickerReportBuilder::new()
            .result(sample_result())
            .factors(factors)
            .build()
            .unwrap();

        let table = report.to_ascii_table();
        assert!(table.contains("Score Report: AAPL"));
        assert!(table.contains("momentum_1m"));
        assert!(table.contains("5.0000"));
        assert!(table.contains("undefined"));
    }

    #[test]
    fn test_report_json() {
        let report = TickerReportBuilder::new()
            .result(sample_result())
            .build()
            .unwrap();

        let json = report.to_json().unwrap();
        assert!(json.contains("\"AAPL\""));
        assert!(json.contains("\"composite_score\""));
    }
}
