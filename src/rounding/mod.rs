// ============================================================================
// Rounding and Truncation
// Four distinct rounding policies plus power-of-ten rounding
// ============================================================================

/// Round `n` to the specified power of ten: `round(n / 10^pow) · 10^pow`.
///
/// # Example
/// ```
/// use numkit::rounding::round_to_power_of_ten;
///
/// assert_eq!(round_to_power_of_ten(1234.0, 2), 1200.0);
/// assert_eq!(round_to_power_of_ten(1254.0, 2), 1300.0);
/// ```
///
/// Negative powers scale by an inexact factor, so results carry the usual
/// binary representation error: `round_to_power_of_ten(0.1234, -2)` is
/// `0.12` up to one ulp.
pub fn round_to_power_of_ten(n: f64, pow: i32) -> f64 {
    let factor = 10f64.powi(pow);
    (n / factor).round() * factor
}

/// Largest integer less than or equal to `n` (round toward negative
/// infinity).
#[inline]
pub fn floor(n: f64) -> f64 {
    n.floor()
}

/// Smallest integer greater than or equal to `n` (round toward positive
/// infinity).
#[inline]
pub fn ceil(n: f64) -> f64 {
    n.ceil()
}

/// Nearest integer to `n`; half-way cases round away from zero.
#[inline]
pub fn round(n: f64) -> f64 {
    n.round()
}

/// Integer part of `n` (round toward zero).
#[inline]
pub fn trunc(n: f64) -> f64 {
    n.trunc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round_to_power_of_ten() {
        assert_eq!(round_to_power_of_ten(1234.0, 2), 1200.0);
        assert_eq!(round_to_power_of_ten(1254.0, 2), 1300.0);
        assert_eq!(round_to_power_of_ten(1234.0, 0), 1234.0);
        assert!((round_to_power_of_ten(1234.5678, -2) - 1234.57).abs() < 1e-9);
        assert_eq!(round_to_power_of_ten(0.0, 3), 0.0);
    }

    #[test]
    fn test_four_policies_are_distinct() {
        // Positive fraction: the four policies disagree pairwise
        assert_eq!(floor(2.7), 2.0);
        assert_eq!(ceil(2.3), 3.0);
        assert_eq!(round(2.5), 3.0);
        assert_eq!(trunc(2.7), 2.0);

        // Negative inputs separate floor from trunc
        assert_eq!(floor(-2.3), -3.0);
        assert_eq!(ceil(-2.7), -2.0);
        assert_eq!(round(-2.5), -3.0);
        assert_eq!(trunc(-2.3), -2.0);
    }

    #[test]
    fn test_integers_are_fixed_points() {
        for value in [-3.0, 0.0, 7.0] {
            assert_eq!(floor(value), value);
            assert_eq!(ceil(value), value);
            assert_eq!(round(value), value);
            assert_eq!(trunc(value), value);
        }
    }

    proptest! {
        #[test]
        fn floor_le_trunc_le_ceil(n in -1e12f64..1e12) {
            prop_assert!(floor(n) <= trunc(n) && trunc(n) <= ceil(n));
            prop_assert!(floor(n) <= round(n) && round(n) <= ceil(n));
        }

        #[test]
        fn trunc_drops_magnitude(n in -1e12f64..1e12) {
            prop_assert!(trunc(n).abs() <= n.abs());
        }
    }
}
