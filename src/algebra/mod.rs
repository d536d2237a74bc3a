// ============================================================================
// Algebra
// Linear equations, averaging, comparison
// ============================================================================

/// Root of the linear equation `a·x + b = 0`.
///
/// Follows IEEE-754 division semantics: when `a == 0` and `b != 0` the result
/// is `±inf`; when both coefficients are zero the result is NaN.
///
/// # Example
/// ```
/// use numkit::algebra::linear_equation_root;
///
/// assert_eq!(linear_equation_root(5.0, -10.0), 2.0);
/// assert_eq!(linear_equation_root(1.0, 8.0), -8.0);
/// assert_eq!(linear_equation_root(5.0, 0.0), 0.0);
/// ```
#[inline]
pub fn linear_equation_root(a: f64, b: f64) -> f64 {
    -b / a
}

/// Average of two values.
///
/// Each operand is halved before summing, so the intermediate never exceeds
/// the larger input and cannot overflow where `(v1 + v2) / 2` would.
#[inline]
pub fn average(value1: f64, value2: f64) -> f64 {
    value1 / 2.0 + value2 / 2.0
}

/// The larger of two values. Equal inputs return that value.
#[inline]
pub fn max_of(first: f64, second: f64) -> f64 {
    first.max(second)
}
