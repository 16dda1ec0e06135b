//! Synthetic series builders shared by the factor tests.

use chrono::NaiveDate;
use quantsnap_data::{PriceBar, PriceSeries};

/// Build a series from closing prices with a fixed volume of 1,000 shares.
pub(crate) fn series_from_closes(closes: &[f64]) -> PriceSeries {
    series_with_volume(closes, 1_000)
}

/// Build a series from closing prices with a constant volume.
pub(crate) fn series_with_volume(closes: &[f64], volume: u64) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar {
            date: start + chrono::Duration::days(i as i64),
            open: close,
            high: close,
            low: close,
            close,
            adjusted_close: close,
            volume,
        })
        .collect();
    PriceSeries::new("TEST", bars).unwrap()
}
