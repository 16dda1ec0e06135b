//! Realized volatility factors.

pub mod rolling;

pub use rolling::{RollingVolatilityConfig, RollingVolatilityFactor};
