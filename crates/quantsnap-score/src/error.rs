//! Error types for configuration validation.

use thiserror::Error;

/// Errors raised when a scoring configuration fails validation.
///
/// Validation runs once at configuration-load time; an invalid
/// configuration is never silently renormalized.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A weight group does not sum to 1.0.
    #[error("{scope} weights sum to {sum}, expected 1.0")]
    WeightSum {
        /// Which weight group failed (e.g. "traditional").
        scope: &'static str,
        /// The actual sum.
        sum: f64,
    },

    /// Penalty tier thresholds are not strictly increasing.
    #[error("Penalty tier {index} breaks strictly increasing threshold order")]
    MisorderedPenaltyThresholds {
        /// Index of the offending tier.
        index: usize,
    },

    /// Penalty tier multipliers decrease as momentum improves.
    #[error("Penalty tier {index} breaks non-decreasing multiplier order")]
    MisorderedPenaltyMultipliers {
        /// Index of the offending tier.
        index: usize,
    },

    /// A penalty multiplier falls outside (0, 1].
    #[error("Penalty multiplier {multiplier} outside (0, 1]")]
    InvalidPenaltyMultiplier {
        /// The offending multiplier.
        multiplier: f64,
    },

    /// Clamp bounds are inverted.
    #[error("Score bounds inverted: lower {lower} is not below upper {upper}")]
    InvalidBounds {
        /// Lower clamp bound.
        lower: f64,
        /// Upper clamp bound.
        upper: f64,
    },

    /// Winsorization clip is not positive.
    #[error("Winsorization clip {clip} must be positive")]
    InvalidWinsorClip {
        /// The offending clip value.
        clip: f64,
    },

    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
