//! Company size factors.

pub mod market_cap;

pub use market_cap::{MarketCapConfig, MarketCapFactor};
