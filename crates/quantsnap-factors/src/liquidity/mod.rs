//! Trading liquidity factors.

pub mod dollar_volume;

pub use dollar_volume::{DollarVolumeConfig, DollarVolumeFactor};
