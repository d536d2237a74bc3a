// ============================================================================
// Number Parsing
// String-to-number conversions with a NaN sentinel on failure
// ============================================================================

/// Parse a number from its full decimal string representation.
///
/// Returns NaN when the string (after trimming surrounding whitespace) is not
/// a valid decimal number.
///
/// # Example
/// ```
/// use numkit::convert::parse_number;
///
/// assert_eq!(parse_number("37"), 37.0);
/// assert_eq!(parse_number("-2.5"), -2.5);
/// assert!(parse_number("2+2").is_nan());
/// ```
pub fn parse_number(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            tracing::trace!(input = s, "decimal parse failed");
            f64::NAN
        },
    }
}

/// Parse a number, substituting `default` when parsing fails.
///
/// # Example
/// ```
/// use numkit::convert::to_number_or;
///
/// assert_eq!(to_number_or("42", 99.0), 42.0);
/// assert_eq!(to_number_or("abc", 99.0), 99.0);
/// ```
pub fn to_number_or(s: &str, default: f64) -> f64 {
    let parsed = parse_number(s);
    if parsed.is_nan() {
        default
    } else {
        parsed
    }
}

/// Length of the longest leading substring of `s` that is a valid decimal
/// float: optional sign, digits, optional fraction, optional exponent.
fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut pos = 0;
    let mut end = 0;

    if matches!(bytes.first(), Some(&b'+') | Some(&b'-')) {
        pos += 1;
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let mut has_digits = pos > int_start;
    if has_digits {
        end = pos;
    }

    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        let frac_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos > frac_start || has_digits {
            has_digits = has_digits || pos > frac_start;
            end = pos;
        }
    }

    if has_digits && pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(&b'+') | Some(&b'-')) {
            exp_pos += 1;
        }
        let exp_start = exp_pos;
        while exp_pos < bytes.len() && bytes[exp_pos].is_ascii_digit() {
            exp_pos += 1;
        }
        if exp_pos > exp_start {
            end = exp_pos;
        }
    }

    end
}

/// Parse a float from the leading numeric prefix of a string.
///
/// Unlike [`parse_number`], trailing non-numeric characters are ignored:
/// `"3.14abc"` parses as `3.14`. Returns NaN when the string has no numeric
/// prefix.
pub fn parse_float(s: &str) -> f64 {
    let trimmed = s.trim_start();
    let len = float_prefix_len(trimmed);
    if len == 0 {
        return f64::NAN;
    }
    trimmed[..len].parse().unwrap_or(f64::NAN)
}

/// Parse an integer from a string in the given radix (base 2 to 36).
///
/// Digits beyond 9 are letters, case-insensitive. Returns NaN when the radix
/// is out of range or the string is not a valid integer in that base.
///
/// # Example
/// ```
/// use numkit::convert::parse_integer;
///
/// assert_eq!(parse_integer("ff", 16), 255.0);
/// assert_eq!(parse_integer("101", 2), 5.0);
/// assert!(parse_integer("12", 2).is_nan());
/// ```
pub fn parse_integer(s: &str, radix: u32) -> f64 {
    // from_str_radix panics outside [2, 36]; the sentinel policy forbids that
    if !(2..=36).contains(&radix) {
        return f64::NAN;
    }
    match i64::from_str_radix(s.trim(), radix) {
        Ok(value) => value as f64,
        Err(_) => {
            tracing::trace!(input = s, radix, "radix parse failed");
            f64::NAN
        },
    }
}
