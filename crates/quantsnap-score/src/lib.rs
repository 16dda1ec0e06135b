#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quantsnap/quantsnap/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod compose;
pub mod config;
pub mod error;
pub mod normalize;
pub mod penalty;
pub mod rank;

pub use compose::{ScoreComposer, ScoreResult};
pub use config::{QualityWeights, ScoreBounds, ScoringConfig, TraditionalWeights};
pub use error::ConfigError;
pub use normalize::{normalize, winsorized_zscores};
pub use penalty::{PenaltyPolicy, PenaltyTier};
pub use rank::{rank, top_n};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
