// ============================================================================
// Numeric Errors
// Error types for digit-array and fixed-point arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during digit-array or fixed-point operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input text is not `digits '.' digits`, or the integer part has more
    /// decimal digits than the configuration allows
    InvalidInput,
    /// The integer part of a quotient does not fit the configured width
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => {
                write!(f, "invalid input: could not parse decimal value")
            },
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: quotient exceeds the integer width")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
