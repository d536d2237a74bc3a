// ============================================================================
// Number Theory
// Primality, powers of two, Fibonacci, digit and range sums
// ============================================================================

use crate::error::{NumericError, NumericResult};

/// Test whether `n` is prime.
///
/// Returns false for all `n <= 1`. Trial-divides by every candidate up to
/// `√n`.
///
/// # Example
/// ```
/// use numkit::number_theory::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(100));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut divisor: i64 = 2;
    // divisor <= n / divisor is divisor² <= n without the squaring overflow
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Test whether `n` is a power of two.
///
/// Returns false for all `n <= 0`. A positive integer is a power of two
/// exactly when its base-2 logarithm is an integer, i.e. when a single bit
/// is set.
#[inline]
pub fn is_power_of_two(n: i64) -> bool {
    n > 0 && n & (n - 1) == 0
}

/// Fibonacci number at `index`: F(0) = 0, F(1) = 1, F(i) = F(i-1) + F(i-2).
///
/// Computed iteratively with checked addition. The overflow policy is
/// explicit: indices past 93 exceed `u64` and return `Err(Overflow)` instead
/// of wrapping.
///
/// # Example
/// ```
/// use numkit::number_theory::fibonacci;
///
/// assert_eq!(fibonacci(0), Ok(0));
/// assert_eq!(fibonacci(10), Ok(55));
/// ```
pub fn fibonacci(index: u32) -> NumericResult<u64> {
    if index < 2 {
        return Ok(u64::from(index));
    }
    let mut previous: u64 = 0;
    let mut current: u64 = 1;
    for _ in 2..=index {
        let next = previous
            .checked_add(current)
            .ok_or(NumericError::Overflow)?;
        previous = current;
        current = next;
    }
    Ok(current)
}

/// Sum of all integers from 1 to `n`, by the closed form `n·(n+1)/2`.
///
/// The even factor is halved before multiplying so the product stays exact;
/// results past `u64::MAX` return `Err(Overflow)`.
pub fn sum_to_n(n: u64) -> NumericResult<u64> {
    let next = n.checked_add(1).ok_or(NumericError::Overflow)?;
    let (half, other) = if n % 2 == 0 { (n / 2, next) } else { (n, next / 2) };
    half.checked_mul(other).ok_or(NumericError::Overflow)
}

/// Sum of the decimal digits of the absolute integer part of `n`.
///
/// The sign is ignored and any fractional part is truncated; the unsigned
/// result type reflects that convention.
///
/// # Example
/// ```
/// use numkit::number_theory::digit_sum;
///
/// assert_eq!(digit_sum(123.0), 6);
/// assert_eq!(digit_sum(-202.0), 4);
/// assert_eq!(digit_sum(99.75), 18);
/// ```
pub fn digit_sum(n: f64) -> u32 {
    // `as` saturates, so non-finite and out-of-range inputs are clamped
    let mut value = n.abs().trunc() as u64;
    let mut sum: u32 = 0;
    while value > 0 {
        sum += (value % 10) as u32;
        value /= 10;
    }
    sum
}

/// Last decimal digit of `n`, i.e. `n % 10`.
///
/// The sign follows the input, matching truncating division: `-17 % 10` is
/// `-7`.
#[inline]
pub fn last_digit(n: i64) -> i64 {
    n % 10
}

/// Count of odd integers in `[0, |n|]`.
///
/// The absolute value of the input is taken first, then the closed form
/// `⌊(|n| + 1) / 2⌋` applies.
#[inline]
pub fn count_of_odd_numbers(n: i64) -> u64 {
    (n.unsigned_abs() + 1) / 2
}

/// Cube of a number.
#[inline]
pub fn cube(n: f64) -> f64 {
    n.powi(3)
}
