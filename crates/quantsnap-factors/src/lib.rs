#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quantsnap/quantsnap/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod extractor;
pub mod factor;
pub mod liquidity;
pub mod momentum;
pub mod quality;
pub mod registry;
pub mod risk_adjusted;
pub mod size;
pub mod stats;
#[cfg(test)]
pub(crate) mod testutil;
pub mod trend;
pub mod vector;
pub mod volatility;

// Re-export common types
pub use extractor::MetricsExtractor;
pub use factor::{Factor, FactorCategory};
pub use vector::{FactorName, FactorVector};

// Re-export registry types for convenience
pub use registry::{FactorInfo, available_factors, factors_by_category, get_factor_info};

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
