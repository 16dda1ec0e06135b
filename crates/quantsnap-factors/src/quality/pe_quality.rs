//! P/E Quality Factor
//!
//! `1 / (pe + 1)` for a positive trailing P/E, so cheaper earnings score
//! higher on a bounded (0, 1) scale. A missing, zero or negative P/E is
//! not quality and scores 0.0.

use crate::factor::{Factor, FactorCategory};
use crate::vector::FactorName;
use quantsnap_data::{Fundamentals, PriceSeries};

/// PeQuality computes the inverse P/E quality transform
#[derive(Debug, Default)]
pub struct PeQualityFactor;

impl Factor for PeQualityFactor {
    fn name(&self) -> FactorName {
        FactorName::PeQuality
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Quality
    }

    fn compute(&self, _series: &PriceSeries, fundamentals: &Fundamentals) -> Option<f64> {
        let value = match fundamentals.pe_ratio {
            Some(pe) if pe > 0.0 => 1.0 / (pe + 1.0),
            _ => 0.0,
        };
        Some(value)
    }
}
