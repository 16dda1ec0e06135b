//! Momentum factors over trailing windows.

pub mod medium_term;
pub mod short_term;

pub use medium_term::{MediumTermMomentumConfig, MediumTermMomentumFactor};
pub use short_term::{ShortTermMomentumConfig, ShortTermMomentumFactor};

use quantsnap_data::PriceSeries;

/// Percentage price change over the trailing `lookback` trading days,
/// computed on the adjusted close.
///
/// Requires `lookback + 1` bars; a shorter series or a zero past price
/// leaves the momentum undefined rather than zero.
pub(crate) fn trailing_return_pct(series: &PriceSeries, lookback: usize) -> Option<f64> {
    let closes = series.adjusted_closes();
    if closes.len() < lookback + 1 {
        return None;
    }
    let current = closes[closes.len() - 1];
    let past = closes[closes.len() - 1 - lookback];
    if past == 0.0 {
        return None;
    }
    Some((current / past - 1.0) * 100.0)
}
