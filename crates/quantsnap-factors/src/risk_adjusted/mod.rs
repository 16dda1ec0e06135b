//! Risk-adjusted return factors.

pub mod sharpe;

pub use sharpe::{SharpeConfig, SharpeFactor};
