// ============================================================================
// Value Classification
// Finite / integer / safe-integer predicates
// ============================================================================

/// Largest integer magnitude exactly representable in an f64 (2^53 - 1).
///
/// Past this bound consecutive integers are no longer distinguishable and
/// arithmetic silently loses precision.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// True when `n` is an ordinary finite number (neither infinite nor NaN).
#[inline]
pub fn is_finite_number(n: f64) -> bool {
    n.is_finite()
}

/// True when `n` is a finite value with no fractional part.
#[inline]
pub fn is_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

/// True when `n` is an integer exactly representable without precision loss,
/// i.e. `|n| <= 2^53 - 1`.
#[inline]
pub fn is_safe_integer(n: f64) -> bool {
    is_integer(n) && n.abs() <= MAX_SAFE_INTEGER
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_is_finite_number() {
        assert!(is_finite_number(0.0));
        assert!(is_finite_number(-12.5));
        assert!(is_finite_number(f64::MAX));
        assert!(!is_finite_number(f64::INFINITY));
        assert!(!is_finite_number(f64::NEG_INFINITY));
        assert!(!is_finite_number(f64::NAN));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(0.0));
        assert!(is_integer(5.0));
        assert!(is_integer(-12.0));
        assert!(!is_integer(5.5));
        assert!(!is_integer(f64::INFINITY));
        assert!(!is_integer(f64::NAN));
    }

    #[test]
    fn test_is_safe_integer() {
        assert!(is_safe_integer(10.0));
        assert!(is_safe_integer(-MAX_SAFE_INTEGER));
        assert!(is_safe_integer(MAX_SAFE_INTEGER));
        // 2^53 itself is representable but 2^53 + 1 is not; the bound excludes it
        assert!(!is_safe_integer(MAX_SAFE_INTEGER + 1.0));
        assert!(!is_safe_integer(5.5));
        assert!(!is_safe_integer(f64::INFINITY));
        assert!(!is_safe_integer(f64::NAN));
    }

    proptest! {
        #[test]
        fn safe_integers_are_integers(n in -9_007_199_254_740_991i64..=9_007_199_254_740_991) {
            let value = n as f64;
            prop_assert!(is_integer(value));
            prop_assert!(is_safe_integer(value));
            prop_assert!(is_finite_number(value));
        }
    }
}
