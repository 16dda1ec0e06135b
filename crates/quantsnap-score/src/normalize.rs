//! Cross-sectional winsorized z-score normalization.
//!
//! This is the only stage that needs the whole universe at once: the
//! mean and sample standard deviation are computed over the current
//! snapshot, extreme values are clipped to `clip` standard deviations,
//! and the clipped values are z-scored against the same statistics.
//! Undefined entries stay undefined and are excluded from the statistics,
//! never zero-filled.

use quantsnap_factors::{FactorName, FactorVector};

/// Winsorize and z-score a cross-section of raw factor values, aligned by
/// input order.
///
/// Undefined and non-finite entries are excluded from the statistics and
/// remain undefined in the output. When the universe shows zero variance
/// on the factor, every defined entry normalizes to 0.0: an identical
/// factor has no discriminative power.
pub fn winsorized_zscores(values: &[Option<f64>], clip: f64) -> Vec<Option<f64>> {
    let defined: Vec<f64> = values
        .iter()
        .copied()
        .filter_map(|v| v.filter(|x| x.is_finite()))
        .collect();

    if defined.is_empty() {
        return values.iter().map(|_| None).collect();
    }

    let mean = defined.iter().sum::<f64>() / defined.len() as f64;
    let std = if defined.len() < 2 {
        0.0
    } else {
        let variance = defined
            .iter()
            .map(|v| (v - mean) * (v - mean))
            .sum::<f64>()
            / (defined.len() - 1) as f64;
        variance.sqrt()
    };

    values
        .iter()
        .copied()
        .map(|value| {
            let v = value.filter(|x| x.is_finite())?;
            if std == 0.0 {
                return Some(0.0);
            }
            let clipped = v.clamp(mean - clip * std, mean + clip * std);
            Some((clipped - mean) / std)
        })
        .collect()
}

/// Normalize one factor across a universe of factor vectors, aligned by
/// input order.
pub fn normalize(vectors: &[FactorVector], factor: FactorName, clip: f64) -> Vec<Option<f64>> {
    let raw: Vec<Option<f64>> = vectors.iter().map(|v| v.get(factor)).collect();
    winsorized_zscores(&raw, clip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zscores_center_and_scale() {
        let values = vec![Some(1.0), Some(2.0), Some(3.0)];
        let normalized = winsorized_zscores(&values, 3.0);

        assert_abs_diff_eq!(normalized[0].unwrap(), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalized[1].unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalized[2].unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_outlier_is_clipped() {
        // One extreme value among a tight cluster
        let mut values: Vec<Option<f64>> = (0..20).map(|i| Some(i as f64 % 3.0)).collect();
        values.push(Some(1_000.0));

        let normalized = winsorized_zscores(&values, 3.0);

        for z in normalized.iter().flatten() {
            assert!(z.abs() <= 3.0 + 1e-9);
        }
    }

    #[test]
    fn test_zero_variance_normalizes_to_zero() {
        let values = vec![Some(7.0), Some(7.0), Some(7.0)];
        let normalized = winsorized_zscores(&values, 3.0);

        assert_eq!(normalized, vec![Some(0.0), Some(0.0), Some(0.0)]);
    }

    #[test]
    fn test_undefined_stays_undefined() {
        let values = vec![Some(1.0), None, Some(3.0), None];
        let normalized = winsorized_zscores(&values, 3.0);

        assert!(normalized[0].is_some());
        assert_eq!(normalized[1], None);
        assert!(normalized[2].is_some());
        assert_eq!(normalized[3], None);
        assert_eq!(normalized.len(), values.len());
    }

    #[test]
    fn test_undefined_excluded_from_statistics() {
        // The None must not drag the mean toward zero
        let with_none = vec![Some(10.0), Some(20.0), None];
        let without = vec![Some(10.0), Some(20.0)];

        let a = winsorized_zscores(&with_none, 3.0);
        let b = winsorized_zscores(&without, 3.0);

        assert_abs_diff_eq!(a[0].unwrap(), b[0].unwrap(), epsilon = 1e-12);
        assert_abs_diff_eq!(a[1].unwrap(), b[1].unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_single_defined_value() {
        let values = vec![None, Some(42.0), None];
        let normalized = winsorized_zscores(&values, 3.0);

        assert_eq!(normalized, vec![None, Some(0.0), None]);
    }

    #[test]
    fn test_all_undefined() {
        let values = vec![None, None];
        let normalized = winsorized_zscores(&values, 3.0);

        assert_eq!(normalized, vec![None, None]);
    }

    #[test]
    fn test_non_finite_treated_as_undefined() {
        let values = vec![Some(f64::INFINITY), Some(1.0), Some(2.0), Some(3.0)];
        let normalized = winsorized_zscores(&values, 3.0);

        assert_eq!(normalized[0], None);
        assert_abs_diff_eq!(normalized[1].unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_across_vectors() {
        let mut a = FactorVector::new("AAA");
        a.momentum_1m = Some(5.0);
        let mut b = FactorVector::new("BBB");
        b.momentum_1m = Some(-5.0);
        let c = FactorVector::new("CCC");

        let normalized = normalize(&[a, b, c], FactorName::Momentum1M, 3.0);

        assert!(normalized[0].unwrap() > 0.0);
        assert!(normalized[1].unwrap() < 0.0);
        assert_eq!(normalized[2], None);
    }
}
