//! Scoring configuration.
//!
//! Every weight, share, tier, bound and clip used by the scoring pipeline
//! is a named, overridable field here. The configuration is loaded once
//! per run, validated fail-fast, and never mutated by the core.

use crate::error::ConfigError;
use crate::penalty::PenaltyPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default share of the composite carried by the traditional sub-score.
pub const DEFAULT_TRADITIONAL_SHARE: f64 = 0.67;
/// Default share of the composite carried by the quality sub-score.
pub const DEFAULT_QUALITY_SHARE: f64 = 0.33;
/// Default divisor bringing dollar volume onto the composite scale.
pub const DEFAULT_DOLLAR_VOLUME_SCALE: f64 = 1e6;
/// Default winsorization clip in standard deviations.
pub const DEFAULT_WINSOR_CLIP: f64 = 3.0;
/// Tolerance when checking that weight groups sum to 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights over the traditional (price-derived) factors, summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraditionalWeights {
    /// Weight on penalized 1-month momentum.
    pub momentum_1m: f64,
    /// Weight on 3-month momentum.
    pub momentum_3m: f64,
    /// Weight on the 3-month Sharpe ratio.
    pub sharpe_3m: f64,
    /// Weight on scaled 20-day dollar volume.
    pub dollar_volume: f64,
    /// Weight on the market cap factor.
    pub market_cap: f64,
}

impl Default for TraditionalWeights {
    fn default() -> Self {
        Self {
            momentum_1m: 0.40,
            momentum_3m: 0.25,
            sharpe_3m: 0.15,
            dollar_volume: 0.10,
            market_cap: 0.10,
        }
    }
}

impl TraditionalWeights {
    /// Sum of the weights.
    pub fn sum(&self) -> f64 {
        self.momentum_1m + self.momentum_3m + self.sharpe_3m + self.dollar_volume + self.market_cap
    }
}

/// Weights over the quality (fundamentals-derived) factors, summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityWeights {
    /// Weight on the inverse P/E quality transform.
    pub pe_quality: f64,
    /// Weight on the dividend yield.
    pub dividend_yield: f64,
    /// Weight on the inverse beta stability transform.
    pub beta_stability: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            pe_quality: 0.45,
            dividend_yield: 0.30,
            beta_stability: 0.25,
        }
    }
}

impl QualityWeights {
    /// Sum of the weights.
    pub fn sum(&self) -> f64 {
        self.pe_quality + self.dividend_yield + self.beta_stability
    }
}

/// Inclusive display range the composite score is clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBounds {
    /// Lower clamp bound.
    pub lower: f64,
    /// Upper clamp bound.
    pub upper: f64,
}

impl Default for ScoreBounds {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 10.0,
        }
    }
}

impl ScoreBounds {
    /// Clamp a raw score into the bounds.
    pub fn clamp(&self, raw: f64) -> f64 {
        raw.clamp(self.lower, self.upper)
    }
}

/// Immutable configuration for one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Traditional sub-score weights.
    pub traditional: TraditionalWeights,
    /// Quality sub-score weights.
    pub quality: QualityWeights,
    /// Share of the composite from the traditional sub-score.
    pub traditional_share: f64,
    /// Share of the composite from the quality sub-score.
    pub quality_share: f64,
    /// Divisor bringing dollar volume onto the composite scale.
    pub dollar_volume_scale: f64,
    /// Momentum penalty tiers.
    pub penalty: PenaltyPolicy,
    /// Composite clamp bounds.
    pub bounds: ScoreBounds,
    /// Winsorization clip in standard deviations.
    pub winsor_clip: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            traditional: TraditionalWeights::default(),
            quality: QualityWeights::default(),
            traditional_share: DEFAULT_TRADITIONAL_SHARE,
            quality_share: DEFAULT_QUALITY_SHARE,
            dollar_volume_scale: DEFAULT_DOLLAR_VOLUME_SCALE,
            penalty: PenaltyPolicy::default(),
            bounds: ScoreBounds::default(),
            winsor_clip: DEFAULT_WINSOR_CLIP,
        }
    }
}

impl ScoringConfig {
    /// Validate the configuration, fail-fast at load time.
    ///
    /// Checks that each weight group and the traditional/quality split sum
    /// to 1.0, that penalty tiers are ordered, that the clamp bounds are
    /// not inverted, and that the winsorization clip is positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let traditional_sum = self.traditional.sum();
        if (traditional_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum {
                scope: "traditional",
                sum: traditional_sum,
            });
        }

        let quality_sum = self.quality.sum();
        if (quality_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum {
                scope: "quality",
                sum: quality_sum,
            });
        }

        let share_sum = self.traditional_share + self.quality_share;
        if (share_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum {
                scope: "composite share",
                sum: share_sum,
            });
        }

        self.penalty.validate()?;

        if self.bounds.lower >= self.bounds.upper {
            return Err(ConfigError::InvalidBounds {
                lower: self.bounds.lower,
                upper: self.bounds.upper,
            });
        }

        if self.winsor_clip <= 0.0 {
            return Err(ConfigError::InvalidWinsorClip {
                clip: self.winsor_clip,
            });
        }

        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// Fields absent from the file keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}
