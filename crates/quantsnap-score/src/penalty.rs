//! Tiered momentum penalties.
//!
//! Recent negative momentum should suppress a ranking far more than its
//! weight alone would, without making the factor undefined. The policy is
//! a small ordered table of first-match-wins tiers applied only to the
//! 1-month momentum before it enters the traditional sub-score.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// One penalty tier: momentum below `threshold` earns `multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyTier {
    /// Upper bound (exclusive) on 1-month momentum, percent.
    pub threshold: f64,
    /// Multiplier applied to the momentum value.
    pub multiplier: f64,
}

/// Ordered first-match-wins penalty tiers over 1-month momentum.
///
/// # Examples
///
/// ```
/// use quantsnap_score::PenaltyPolicy;
///
/// let policy = PenaltyPolicy::default();
/// assert_eq!(policy.multiplier(-8.0), 0.1); // severe
/// assert_eq!(policy.multiplier(-2.0), 0.3); // heavy
/// assert_eq!(policy.multiplier(1.0), 0.7);  // moderate
/// assert_eq!(policy.multiplier(5.0), 1.0);  // none
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyPolicy {
    /// Tiers in ascending threshold order.
    pub tiers: Vec<PenaltyTier>,
}

impl Default for PenaltyPolicy {
    fn default() -> Self {
        Self {
            tiers: vec![
                // severe: deep 1-month drawdown
                PenaltyTier {
                    threshold: -5.0,
                    multiplier: 0.1,
                },
                // heavy: any negative month
                PenaltyTier {
                    threshold: 0.0,
                    multiplier: 0.3,
                },
                // moderate: flat-to-weak month
                PenaltyTier {
                    threshold: 2.0,
                    multiplier: 0.7,
                },
            ],
        }
    }
}

impl PenaltyPolicy {
    /// Multiplier for a 1-month momentum value, first matching tier wins;
    /// momentum at or above every threshold is unpenalized.
    pub fn multiplier(&self, momentum_1m: f64) -> f64 {
        for tier in &self.tiers {
            if momentum_1m < tier.threshold {
                return tier.multiplier;
            }
        }
        1.0
    }

    /// Apply the policy to a momentum value.
    pub fn apply(&self, momentum_1m: f64) -> f64 {
        momentum_1m * self.multiplier(momentum_1m)
    }

    /// Validate tier ordering: thresholds strictly increasing, multipliers
    /// non-decreasing and inside (0, 1].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, tier) in self.tiers.iter().enumerate() {
            if !(tier.multiplier > 0.0 && tier.multiplier <= 1.0) {
                return Err(ConfigError::InvalidPenaltyMultiplier {
                    multiplier: tier.multiplier,
                });
            }
            if index > 0 {
                let prev = &self.tiers[index - 1];
                if tier.threshold <= prev.threshold {
                    return Err(ConfigError::MisorderedPenaltyThresholds { index });
                }
                if tier.multiplier < prev.multiplier {
                    return Err(ConfigError::MisorderedPenaltyMultipliers { index });
                }
            }
        }
        Ok(())
    }
}
