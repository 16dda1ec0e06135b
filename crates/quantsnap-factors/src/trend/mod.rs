//! Price trend factors.

pub mod price_slope;

pub use price_slope::{PriceSlopeConfig, PriceSlopeFactor};
