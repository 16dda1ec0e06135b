//! Fundamental quality factors.
//!
//! These factors read only the static fundamentals; a missing field is a
//! neutral 0.0 contribution, never an error and never undefined.

pub mod beta_stability;
pub mod dividend_yield;
pub mod pe_quality;

pub use beta_stability::{BetaStabilityConfig, BetaStabilityFactor};
pub use dividend_yield::DividendYieldFactor;
pub use pe_quality::PeQualityFactor;
