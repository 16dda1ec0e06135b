//! Beta Stability Factor
//!
//! `1 / (beta + offset)` rewards low-beta names; the offset keeps the
//! transform finite for beta near zero. A missing beta, or a beta at or
//! below `-offset` (where the transform would blow up or flip sign),
//! scores a neutral 0.0.

use crate::factor::{Factor, FactorCategory};
use crate::vector::FactorName;
use quantsnap_data::{Fundamentals, PriceSeries};
use serde::{Deserialize, Serialize};

/// Configuration for the BetaStability factor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetaStabilityConfig {
    /// Denominator offset guarding against division by zero (default: 0.1)
    pub offset: f64,
}

impl Default for BetaStabilityConfig {
    fn default() -> Self {
        Self { offset: 0.1 }
    }
}

/// BetaStability computes the inverse beta stability transform
#[derive(Debug, Default)]
pub struct BetaStabilityFactor {
    config: BetaStabilityConfig,
}

impl BetaStabilityFactor {
    /// Create the factor with a custom configuration.
    pub const fn with_config(config: BetaStabilityConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &BetaStabilityConfig {
        &self.config
    }
}

impl Factor for BetaStabilityFactor {
    fn name(&self) -> FactorName {
        FactorName::BetaStability
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Quality
    }

    fn compute(&self, _series: &PriceSeries, fundamentals: &Fundamentals) -> Option<f64> {
        let value = match fundamentals.beta {
            Some(beta) if beta + self.config.offset > 0.0 => 1.0 / (beta + self.config.offset),
            _ => 0.0,
        };
        Some(value)
    }
}
