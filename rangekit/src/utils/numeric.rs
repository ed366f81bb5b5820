//! Numeric helpers shared by the slider widgets.

/// Threshold below which two values are considered equal.
const DEFAULT_EPSILON: f64 = 0.00001;

/// Clamp `value` to `[min, max]`. NaN passes through unchanged.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Element-wise equality of two value arrays.
pub fn arrays_equal(left: &[f64], right: &[f64]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(a, b)| a == b)
}

/// Whether `a` and `b` differ by at most a small epsilon.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= DEFAULT_EPSILON
}

/// Index of the item with the smallest key, or None for an empty slice.
///
/// Scans linearly and only replaces the current minimum on a strictly
/// smaller key, so the first of several equal minima wins.
pub fn arg_min<T>(items: &[T], mut key: impl FnMut(&T) -> f64) -> Option<usize> {
    let (first, rest) = items.split_first()?;
    let mut min_index = 0;
    let mut min_key = key(first);

    for (offset, item) in rest.iter().enumerate() {
        let k = key(item);
        if k < min_key {
            min_index = offset + 1;
            min_key = k;
        }
    }

    Some(min_index)
}

/// Number of digits after the decimal point in `value`'s shortest
/// representation, e.g. 0 for `2.0`, 2 for `0.25`.
pub fn decimal_precision(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let repr = value.to_string();
    repr.split_once('.').map_or(0, |(_, fraction)| fraction.len())
}

/// Round `value` to `precision` decimal places.
pub fn round_to_precision(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision.min(15) as i32);
    (value * factor).round() / factor
}

/// Format a value with a fixed number of decimal places.
pub fn format_fixed(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(5.5, 0.0, 10.0), 5.5);
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_arrays_equal() {
        assert!(arrays_equal(&[1.0, 2.0], &[1.0, 2.0]));
        assert!(!arrays_equal(&[1.0, 2.0], &[2.0, 1.0]));
        assert!(!arrays_equal(&[1.0], &[1.0, 2.0]));
        assert!(arrays_equal(&[], &[]));
    }

    #[test]
    fn test_arg_min_first_minimum_wins() {
        let items = [3.0, 1.0, 2.0, 1.0];
        assert_eq!(arg_min(&items, |v| *v), Some(1));
    }

    #[test]
    fn test_arg_min_empty() {
        let items: [f64; 0] = [];
        assert_eq!(arg_min(&items, |v| *v), None);
    }

    #[test]
    fn test_arg_min_ignores_nan_after_first() {
        let items = [2.0, f64::NAN, 1.0];
        assert_eq!(arg_min(&items, |v| *v), Some(2));
    }

    #[test]
    fn test_decimal_precision() {
        assert_eq!(decimal_precision(2.0), 0);
        assert_eq!(decimal_precision(0.5), 1);
        assert_eq!(decimal_precision(0.25), 2);
        assert_eq!(decimal_precision(f64::INFINITY), 0);
    }

    #[test]
    fn test_round_to_precision() {
        assert_eq!(round_to_precision(0.1 + 0.2, 1), 0.3);
        assert_eq!(round_to_precision(12.0, 0), 12.0);
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_fixed(12.0, 0), "12");
        assert_eq!(format_fixed(0.5, 2), "0.50");
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(!approx_eq(0.1, 0.2));
    }
}
