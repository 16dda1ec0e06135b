//! Small statistics helpers shared by the factor implementations.

/// Trading days per year used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n − 1 denominator), or `None` when fewer than
/// two observations are available. A constant slice yields exactly 0.0.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let variance =
        values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Ordinary-least-squares slope of `values` against their 0-based index,
/// or `None` when fewer than two observations are available.
pub fn ols_slope(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = mean(values)?;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, y) in values.iter().enumerate() {
        let dx = i as f64 - x_mean;
        numerator += dx * (y - y_mean);
        denominator += dx * dx;
    }

    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_abs_diff_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_std() {
        assert_eq!(sample_std(&[1.0]), None);
        assert_abs_diff_eq!(
            sample_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap(),
            2.138089935299395,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sample_std_constant_is_zero() {
        assert_abs_diff_eq!(
            sample_std(&[3.0, 3.0, 3.0, 3.0]).unwrap(),
            0.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_ols_slope_linear() {
        // y = 2x + 1
        let values = [1.0, 3.0, 5.0, 7.0, 9.0];
        assert_abs_diff_eq!(ols_slope(&values).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ols_slope_flat() {
        let values = [4.0, 4.0, 4.0];
        assert_abs_diff_eq!(ols_slope(&values).unwrap(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_ols_slope_too_short() {
        assert_eq!(ols_slope(&[1.0]), None);
        assert_eq!(ols_slope(&[]), None);
    }
}
