// ============================================================================
// Numeric Errors
// Error types for operations whose result domain cannot express failure
// ============================================================================

use std::fmt;

/// Errors for the few operations that cannot signal failure through their
/// numeric result.
///
/// Floating-point operations in this crate never return errors: undefined
/// results propagate as NaN or infinity per IEEE-754, and parse failures
/// surface as NaN. Integer-valued operations (`fibonacci`, `sum_to_n`) and
/// radix formatting are the exceptions and use this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the range of the integer result type
    Overflow,
    /// Radix outside the supported range [2, 36]
    InvalidRadix,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::InvalidRadix => {
                write!(f, "invalid radix: base must be in [2, 36]")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(
            NumericError::InvalidRadix.to_string(),
            "invalid radix: base must be in [2, 36]"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::InvalidRadix);
    }
}
