// ============================================================================
// Sign
// ============================================================================

use crate::numeric::MoneyError;
use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sign of a monetary amount, stored apart from its magnitude.
///
/// `Minus` orders before `Plus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Minus,
    #[default]
    Plus,
}

impl Sign {
    pub const fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }

    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Minus)
    }

    /// The opposite sign.
    pub const fn flip(self) -> Self {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }
}

impl TryFrom<char> for Sign {
    type Error = MoneyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Sign::Plus),
            '-' => Ok(Sign::Minus),
            _ => Err(MoneyError::InvalidSign),
        }
    }
}

impl From<Sign> for char {
    fn from(sign: Sign) -> char {
        sign.as_char()
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.flip()
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_char() {
        assert_eq!(Sign::try_from('+'), Ok(Sign::Plus));
        assert_eq!(Sign::try_from('-'), Ok(Sign::Minus));
        assert_eq!(Sign::try_from('*'), Err(MoneyError::InvalidSign));
        assert_eq!(Sign::try_from(' '), Err(MoneyError::InvalidSign));
    }

    #[test]
    fn test_flip_and_neg() {
        assert_eq!(Sign::Plus.flip(), Sign::Minus);
        assert_eq!(-Sign::Minus, Sign::Plus);
    }

    #[test]
    fn test_minus_orders_first() {
        assert!(Sign::Minus < Sign::Plus);
        assert_eq!(Sign::default(), Sign::Plus);
    }
}
