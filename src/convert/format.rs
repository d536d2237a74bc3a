// ============================================================================
// Number Formatting
// Radix, exponential, fixed-point, and significant-digit representations
// ============================================================================

use crate::error::{NumericError, NumericResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

const RADIX_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Format an integer in the given radix (base 2 to 36), lowercase digits.
///
/// # Errors
/// Returns `InvalidRadix` when the base is outside `[2, 36]`.
///
/// # Example
/// ```
/// use numkit::convert::format_radix;
///
/// assert_eq!(format_radix(255, 16).unwrap(), "ff");
/// assert_eq!(format_radix(5, 2).unwrap(), "101");
/// assert_eq!(format_radix(-35, 36).unwrap(), "-z");
/// ```
pub fn format_radix(value: i64, radix: u32) -> NumericResult<String> {
    if !(2..=36).contains(&radix) {
        return Err(NumericError::InvalidRadix);
    }

    // unsigned_abs also covers i64::MIN, which has no positive counterpart
    let mut magnitude = value.unsigned_abs();
    if magnitude == 0 {
        return Ok("0".to_string());
    }

    let base = u64::from(radix);
    let mut digits = Vec::new();
    while magnitude > 0 {
        digits.push(RADIX_DIGITS[(magnitude % base) as usize]);
        magnitude /= base;
    }

    let mut out = String::with_capacity(digits.len() + 1);
    if value < 0 {
        out.push('-');
    }
    for &digit in digits.iter().rev() {
        out.push(digit as char);
    }
    Ok(out)
}

/// Format a number in exponential notation with the given number of fraction
/// digits, e.g. `to_exponential(314.15, 2)` is `"3.14e2"`.
pub fn to_exponential(n: f64, fraction_digits: usize) -> String {
    format!("{:.*e}", fraction_digits, n)
}

/// Format a number in fixed-point notation with the given number of fraction
/// digits, e.g. `to_fixed(2.5, 3)` is `"2.500"`.
pub fn to_fixed(n: f64, fraction_digits: usize) -> String {
    format!("{:.*}", fraction_digits, n)
}

/// Format a number to the given number of significant digits.
///
/// Digits after the significant range are rounded away; a precision smaller
/// than the integer part's width rounds to a power of ten. `precision` is
/// clamped to at least 1.
///
/// # Example
/// ```
/// use numkit::convert::to_precision;
///
/// assert_eq!(to_precision(123.456, 4), "123.5");
/// assert_eq!(to_precision(0.000123, 2), "0.00012");
/// assert_eq!(to_precision(1234.5, 2), "1200");
/// ```
pub fn to_precision(n: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if !n.is_finite() || n == 0.0 {
        return format!("{:.*}", precision - 1, n);
    }

    let exponent = n.abs().log10().floor() as i32;
    let decimals = precision as i32 - 1 - exponent;
    if decimals > 0 {
        format!("{:.*}", decimals as usize, n)
    } else {
        let factor = 10f64.powi(-decimals);
        format!("{:.0}", (n / factor).round() * factor)
    }
}

/// Sum of three numbers, rounded to 12 fraction digits.
///
/// The fixed rounding absorbs binary representation error in short decimal
/// inputs: `0.1 + 0.2 + 0.3` returns exactly `0.6`. Non-finite sums pass
/// through unchanged.
pub fn sum_of_three(x1: f64, x2: f64, x3: f64) -> f64 {
    let sum = x1 + x2 + x3;
    Decimal::from_f64(sum)
        .map(|d| d.round_dp(12))
        .and_then(|d| d.to_f64())
        .unwrap_or(sum)
}
