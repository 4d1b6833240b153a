// ============================================================================
// Money Errors
// Validation failures raised by construction, arithmetic and conversion
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while building or operating on monetary values.
///
/// Every failure is a local validation error: nothing is retried and no
/// partially updated value is ever observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoneyError {
    /// Sign character was not `+` or `-`
    InvalidSign,
    /// Fractional part (hundredths) was 100 or more
    FractionalOutOfRange,
    /// Input string was empty or blank
    EmptyInput,
    /// Input string did not match `<sign><digits>.<digits> <currency>`
    InvalidFormat,
    /// Integer part exceeded u64::MAX
    NumericOverflow,
    /// Exchange rate was zero or negative
    InvalidRate,
    /// Source value was absent
    NullInput,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::InvalidSign => write!(f, "invalid sign: expected '+' or '-'"),
            MoneyError::FractionalOutOfRange => {
                write!(f, "fractional part out of range: must be between 0 and 99")
            },
            MoneyError::EmptyInput => write!(f, "empty input: nothing to parse"),
            MoneyError::InvalidFormat => write!(
                f,
                "invalid format: expected '<sign><integer>.<fraction> <currency>'"
            ),
            MoneyError::NumericOverflow => {
                write!(f, "numeric overflow: integer part exceeded maximum value")
            },
            MoneyError::InvalidRate => write!(f, "invalid rate: exchange rate must be positive"),
            MoneyError::NullInput => write!(f, "null input: source value is absent"),
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::FractionalOutOfRange.to_string(),
            "fractional part out of range: must be between 0 and 99"
        );
        assert_eq!(
            MoneyError::InvalidRate.to_string(),
            "invalid rate: exchange rate must be positive"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(MoneyError::InvalidSign, MoneyError::InvalidSign);
        assert_ne!(MoneyError::InvalidSign, MoneyError::InvalidFormat);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(MoneyError::NullInput);
        assert_eq!(err.to_string(), "null input: source value is absent");
    }
}
