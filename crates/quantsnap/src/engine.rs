//! The synchronous scoring engine.
//!
//! Wires the pipeline end to end for one evaluation run: per-ticker factor
//! extraction and score composition, a full-universe pass for the
//! cross-sectional z-scores, then deterministic ranking. Per-ticker
//! problems stay per-ticker: a short price history leaves factors
//! undefined but never drops the ticker from the leaderboard.

use quantsnap_data::{Fundamentals, PriceSeries};
use quantsnap_factors::{FactorName, FactorVector, MetricsExtractor};
use quantsnap_output::{Leaderboard, LeaderboardEntry, TickerReport, TickerReportBuilder};
use quantsnap_score::{ConfigError, ScoreComposer, ScoreResult, ScoringConfig, normalize, rank};
use std::collections::HashMap;

/// Resolved inputs for one ticker: exactly one price series and one
/// fundamentals record, already fetched by the data layer.
#[derive(Debug, Clone)]
pub struct TickerData {
    /// Daily price history, oldest bar first.
    pub series: PriceSeries,
    /// Static company attributes.
    pub fundamentals: Fundamentals,
}

impl TickerData {
    /// Pair a price series with its fundamentals.
    pub const fn new(series: PriceSeries, fundamentals: Fundamentals) -> Self {
        Self {
            series,
            fundamentals,
        }
    }
}

/// Runs the full scoring pipeline over a universe of tickers.
///
/// # Examples
///
/// ```
/// use quantsnap::ScoringEngine;
/// use quantsnap_score::ScoringConfig;
///
/// let engine = ScoringEngine::new(ScoringConfig::default()).unwrap();
/// let board = engine.evaluate("demo", &[]);
/// assert!(board.is_empty());
/// ```
#[derive(Debug)]
pub struct ScoringEngine {
    extractor: MetricsExtractor,
    composer: ScoreComposer,
}

impl ScoringEngine {
    /// Create an engine, validating the configuration fail-fast.
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            extractor: MetricsExtractor::new(),
            composer: ScoreComposer::new(config)?,
        })
    }

    /// Create an engine with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ScoringConfig::default()).expect("default configuration is valid")
    }

    /// The active configuration.
    pub const fn config(&self) -> &ScoringConfig {
        self.composer.config()
    }

    /// Extract factors and compose scores for a single ticker.
    pub fn score_ticker(&self, data: &TickerData) -> (FactorVector, ScoreResult) {
        let factors = self.extractor.extract(&data.series, &data.fundamentals);
        let result = self.composer.compose(&factors);
        (factors, result)
    }

    /// Build a ranked leaderboard over a universe of tickers.
    ///
    /// Scores depend only on each ticker's own inputs, so input order
    /// never changes a score; equal scores order by ascending symbol.
    pub fn evaluate(&self, universe: impl Into<String>, tickers: &[TickerData]) -> Leaderboard {
        let mut vectors = Vec::with_capacity(tickers.len());
        let mut results = Vec::with_capacity(tickers.len());
        for data in tickers {
            let (factors, result) = self.score_ticker(data);
            vectors.push(factors);
            results.push(result);
        }

        // Cross-sectional z-scores need every ticker's raw factors; this
        // is the only full-universe barrier in the pipeline.
        let clip = self.config().winsor_clip;
        let mut z_columns = Vec::with_capacity(FactorName::ALL.len());
        for name in FactorName::ALL {
            z_columns.push(normalize(&vectors, name, clip));
        }

        let mut by_symbol: HashMap<String, usize> = HashMap::with_capacity(tickers.len());
        for (index, vector) in vectors.iter().enumerate() {
            by_symbol.insert(vector.symbol.clone(), index);
        }

        let ranked = rank(results);

        let entries = ranked
            .into_iter()
            .filter_map(|result| {
                let index = *by_symbol.get(&result.symbol)?;
                let data = &tickers[index];
                let z_scores = z_columns.iter().map(|column| column[index]).collect();

                Some(LeaderboardEntry {
                    result,
                    factors: vectors[index].clone(),
                    z_scores,
                    name: data.fundamentals.name.clone(),
                    sector: data.fundamentals.sector.clone(),
                    last_price: data.series.last_close(),
                    daily_change_pct: data.series.daily_change_pct(),
                })
            })
            .collect();

        Leaderboard::new(universe, entries)
    }

    /// Build a leaderboard and keep the first `n` entries.
    ///
    /// An `n` larger than the universe returns the full leaderboard.
    pub fn evaluate_top_n(
        &self,
        universe: impl Into<String>,
        tickers: &[TickerData],
        n: usize,
    ) -> Leaderboard {
        let mut board = self.evaluate(universe, tickers);
        board.entries.truncate(n);
        board
    }

    /// Build a standalone score report for one ticker.
    pub fn report(&self, data: &TickerData) -> TickerReport {
        let (factors, result) = self.score_ticker(data);

        let mut builder = TickerReportBuilder::new().result(result).factors(factors);
        if let Some(name) = &data.fundamentals.name {
            builder = builder.name(name.clone());
        }
        if let Some(sector) = &data.fundamentals.sector {
            builder = builder.sector(sector.clone());
        }

        builder
            .build()
            .expect("report builder was given a result")
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
