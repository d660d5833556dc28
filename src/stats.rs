/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the population standard deviation given a pre-computed mean.
/// Returns 0.0 for empty input.
pub fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_mean_values() {
        assert_eq!(mean(&[85.0, 90.0, 92.0]), 89.0);
    }

    #[test]
    fn test_stddev_empty() {
        assert_eq!(stddev(&[], 0.0), 0.0);
    }

    #[test]
    fn test_stddev_uniform_values() {
        let values = [80.0, 80.0, 80.0];
        assert_eq!(stddev(&values, mean(&values)), 0.0);
    }

    #[test]
    fn test_stddev_known_values() {
        // Population stddev of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&values);
        assert!((stddev(&values, m) - 2.0).abs() < 1e-9);
    }
}
