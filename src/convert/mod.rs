// ============================================================================
// Conversion Module
// String parsing, number formatting, and value classification
// ============================================================================
//
// This module provides:
// - Parsing: decimal, prefix-float, and radix-integer parsing with a NaN
//   sentinel on failure (never a panic, never an error type)
// - Formatting: radix, exponential, fixed-point, and significant-digit
//   string representations
// - Classification: finite / integer / safe-integer predicates
//
// Design principles:
// - Parse failure is communicated solely through the NaN sentinel (or the
//   caller-supplied fallback in `to_number_or`)
// - Formatting with an out-of-range radix is the one recoverable input
//   error, surfaced as NumericResult

mod classify;
mod format;
mod parse;

pub use classify::{is_finite_number, is_integer, is_safe_integer, MAX_SAFE_INTEGER};
pub use format::{format_radix, sum_of_three, to_exponential, to_fixed, to_precision};
pub use parse::{parse_float, parse_integer, parse_number, to_number_or};
