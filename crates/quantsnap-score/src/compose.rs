//! Score composition.
//!
//! Blends the penalized traditional factors and the quality factors into
//! a single clamped composite score. Undefined factors contribute zero
//! with their weight left in place, so a ticker with partial data is
//! scored on what it has rather than dropped or zero-filled.

use crate::config::ScoringConfig;
use crate::error::ConfigError;
use quantsnap_factors::FactorVector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Ticker symbol.
    pub symbol: String,
    /// Weighted traditional sub-score.
    pub traditional_score: f64,
    /// Weighted quality sub-score.
    pub quality_score: f64,
    /// Blended composite, clamped to the configured bounds.
    pub composite_score: f64,
    /// 1-based leaderboard position, set by the ranker.
    pub rank: Option<usize>,
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            Some(rank) => write!(
                f,
                "#{} {}: {:.3} (traditional {:.3}, quality {:.3})",
                rank, self.symbol, self.composite_score, self.traditional_score, self.quality_score
            ),
            None => write!(
                f,
                "{}: {:.3} (traditional {:.3}, quality {:.3})",
                self.symbol, self.composite_score, self.traditional_score, self.quality_score
            ),
        }
    }
}

/// Composes factor vectors into scores under a validated configuration.
///
/// # Examples
///
/// ```
/// use quantsnap_factors::FactorVector;
/// use quantsnap_score::{ScoreComposer, ScoringConfig};
///
/// let composer = ScoreComposer::new(ScoringConfig::default()).unwrap();
///
/// let mut factors = FactorVector::new("AAPL");
/// factors.momentum_1m = Some(4.0);
/// factors.pe_quality = Some(0.05);
///
/// let result = composer.compose(&factors);
/// assert_eq!(result.symbol, "AAPL");
/// assert!(result.composite_score >= 0.0 && result.composite_score <= 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct ScoreComposer {
    config: ScoringConfig,
}

impl ScoreComposer {
    /// Create a composer, validating the configuration fail-fast.
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Compose the scores for one ticker.
    ///
    /// Deterministic and pure: the same factor vector always produces a
    /// bit-identical result.
    pub fn compose(&self, factors: &FactorVector) -> ScoreResult {
        let weights = &self.config.traditional;
        let mut traditional = 0.0;
        if let Some(momentum) = factors.momentum_1m {
            traditional += weights.momentum_1m * self.config.penalty.apply(momentum);
        }
        if let Some(momentum) = factors.momentum_3m {
            traditional += weights.momentum_3m * momentum;
        }
        if let Some(sharpe) = factors.sharpe_3m {
            traditional += weights.sharpe_3m * sharpe;
        }
        if let Some(dollar_volume) = factors.dollar_volume_20d {
            traditional +=
                weights.dollar_volume * (dollar_volume / self.config.dollar_volume_scale);
        }
        if let Some(market_cap) = factors.market_cap_factor {
            traditional += weights.market_cap * market_cap;
        }

        let weights = &self.config.quality;
        let mut quality = 0.0;
        if let Some(pe_quality) = factors.pe_quality {
            quality += weights.pe_quality * pe_quality;
        }
        if let Some(dividend_yield) = factors.dividend_yield {
            quality += weights.dividend_yield * dividend_yield;
        }
        if let Some(beta_stability) = factors.beta_stability {
            quality += weights.beta_stability * beta_stability;
        }

        let raw =
            traditional * self.config.traditional_share + quality * self.config.quality_share;

        ScoreResult {
            symbol: factors.symbol.clone(),
            traditional_score: traditional,
            quality_score: quality,
            composite_score: self.config.bounds.clamp(raw),
            rank: None,
        }
    }
}
