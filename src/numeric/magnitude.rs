// ============================================================================
// Magnitude
// Unsigned fixed-point amount with two fractional digits (hundredths)
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use std::fmt;

/// Non-negative amount split into a whole part and hundredths.
///
/// The sign of a monetary value is carried separately, so the magnitude
/// never has to represent anything below zero. The fractional part is kept
/// in `[0, 99]`: additions carry into the integer part and subtractions
/// borrow from it.
///
/// Field order makes the derived `Ord` compare integer parts first, then
/// fractional parts.
///
/// # Example
/// ```
/// use fixed_money::numeric::Magnitude;
///
/// let a = Magnitude::new(0, 75).unwrap();
/// let b = Magnitude::new(0, 50).unwrap();
/// let sum = a.checked_add(b).unwrap();
/// assert_eq!(sum.to_string(), "1.25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Magnitude {
    integer: u64,
    fractional: u8,
}

impl Magnitude {
    /// Hundredths per whole unit
    pub const SCALE: u64 = 100;

    /// Zero value
    pub const ZERO: Self = Self {
        integer: 0,
        fractional: 0,
    };

    /// Largest representable magnitude
    pub const MAX: Self = Self {
        integer: u64::MAX,
        fractional: 99,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from integer and fractional (hundredths) parts.
    ///
    /// # Errors
    /// Returns `FractionalOutOfRange` if `fractional >= 100`.
    #[inline]
    pub fn new(integer: u64, fractional: u64) -> MoneyResult<Self> {
        if fractional >= Self::SCALE {
            return Err(MoneyError::FractionalOutOfRange);
        }

        Ok(Self {
            integer,
            fractional: fractional as u8,
        })
    }

    /// Create a whole amount with no hundredths.
    #[inline]
    pub const fn from_integer(integer: u64) -> Self {
        Self {
            integer,
            fractional: 0,
        }
    }

    /// Parse the two digit groups of a textual amount.
    ///
    /// `fractional` is read as an integer count of hundredths, so `"5"`
    /// means five hundredths, not fifty.
    ///
    /// # Errors
    /// - `InvalidFormat` if either group is empty or holds non-digits
    /// - `NumericOverflow` if either group does not fit in a u64
    /// - `FractionalOutOfRange` if the fractional group is 100 or more
    pub fn from_digits(integer: &str, fractional: &str) -> MoneyResult<Self> {
        let integer = parse_digits(integer)?;
        let fractional = parse_digits(fractional)?;
        Self::new(integer, fractional)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the whole-unit part.
    #[inline]
    pub const fn integer_part(self) -> u64 {
        self.integer
    }

    /// Get the hundredths, always in `[0, 99]`.
    #[inline]
    pub const fn fractional_part(self) -> u8 {
        self.fractional
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.integer == 0 && self.fractional == 0
    }

    /// Total value in hundredths.
    #[inline]
    pub const fn to_hundredths(self) -> u128 {
        self.integer as u128 * Self::SCALE as u128 + self.fractional as u128
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition with fractional carry.
    ///
    /// Each operand holds at most 99 hundredths, so at most one unit is
    /// carried.
    ///
    /// # Errors
    /// Returns `NumericOverflow` if the integer part exceeds u64::MAX.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> MoneyResult<Self> {
        let fractional = self.fractional as u64 + rhs.fractional as u64;
        let carry = fractional / Self::SCALE;

        let integer = self
            .integer
            .checked_add(rhs.integer)
            .and_then(|sum| sum.checked_add(carry))
            .ok_or(MoneyError::NumericOverflow)?;

        Ok(Self {
            integer,
            fractional: (fractional % Self::SCALE) as u8,
        })
    }

    /// Checked subtraction with fractional borrow.
    ///
    /// Returns `None` when `rhs` is larger than `self`, since a magnitude
    /// cannot go below zero.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        if rhs > self {
            return None;
        }

        if self.fractional < rhs.fractional {
            // self > rhs with a smaller fraction implies self.integer > rhs.integer
            Some(Self {
                integer: self.integer - 1 - rhs.integer,
                fractional: self.fractional + Self::SCALE as u8 - rhs.fractional,
            })
        } else {
            Some(Self {
                integer: self.integer - rhs.integer,
                fractional: self.fractional - rhs.fractional,
            })
        }
    }

    /// Absolute difference between two magnitudes.
    #[inline]
    pub fn abs_diff(self, rhs: Self) -> Self {
        match self.checked_sub(rhs) {
            Some(diff) => diff,
            None => rhs.checked_sub(self).unwrap_or(Self::ZERO),
        }
    }
}

fn parse_digits(token: &str) -> MoneyResult<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyError::InvalidFormat);
    }

    // Only digits remain, so the sole failure mode is overflow
    token.parse().map_err(|_| MoneyError::NumericOverflow)
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.integer, self.fractional)
    }
}

// ============================================================================
// Decimal bridging (exact, no binary floating point)
// ============================================================================

impl Magnitude {
    /// Convert to rust_decimal::Decimal with scale 2.
    pub fn to_decimal(self) -> Decimal {
        // u64::MAX * 100 fits comfortably in Decimal's 96-bit mantissa
        Decimal::from_i128_with_scale(self.to_hundredths() as i128, 2)
    }

    /// Build from a total count of hundredths.
    ///
    /// # Errors
    /// Returns `NumericOverflow` if the whole part does not fit in a u64.
    pub fn from_hundredths(hundredths: u128) -> MoneyResult<Self> {
        let scale = Self::SCALE as u128;
        let integer =
            u64::try_from(hundredths / scale).map_err(|_| MoneyError::NumericOverflow)?;

        Ok(Self {
            integer,
            fractional: (hundredths % scale) as u8,
        })
    }

    /// Multiply by a decimal factor, truncating the exact product to
    /// hundredths.
    ///
    /// Works on the factor's mantissa and scale in integer arithmetic, so
    /// no intermediate rounding can reach the kept digits. The factor's
    /// sign is ignored; callers carry it separately.
    ///
    /// # Errors
    /// Returns `NumericOverflow` if the whole part does not fit in a u64.
    pub fn checked_mul_truncated(self, factor: Decimal) -> MoneyResult<Self> {
        let hundredths = self.to_hundredths();
        let mantissa = factor.mantissa().unsigned_abs();
        let scale = factor.scale();

        // factor = whole + part / 10^scale, with part < 10^scale
        let divisor = 10u128.pow(scale);
        let whole = mantissa / divisor;
        let part = mantissa % divisor;

        // Split part so each partial product stays below 2^118:
        // hundredths < 2^71 and each half of part < 10^14 < 2^47
        let low_digits = scale / 2;
        let low_divisor = 10u128.pow(low_digits);
        let high_divisor = 10u128.pow(scale - low_digits);
        let part_high = part / low_divisor;
        let part_low = part % low_divisor;

        let fraction = (hundredths * part_high + hundredths * part_low / low_divisor) / high_divisor;

        let total = hundredths
            .checked_mul(whole)
            .and_then(|product| product.checked_add(fraction))
            .ok_or(MoneyError::NumericOverflow)?;

        Self::from_hundredths(total)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn mag(integer: u64, fractional: u64) -> Magnitude {
        Magnitude::new(integer, fractional).unwrap()
    }

    #[test]
    fn test_new_rejects_fraction_of_one_hundred() {
        assert_eq!(
            Magnitude::new(1, 100),
            Err(MoneyError::FractionalOutOfRange)
        );
        assert!(Magnitude::new(1, 99).is_ok());
    }

    #[test]
    fn test_checked_add_carries() {
        let sum = mag(0, 75).checked_add(mag(0, 50)).unwrap();
        assert_eq!(sum, mag(1, 25));

        let exact = mag(2, 50).checked_add(mag(3, 50)).unwrap();
        assert_eq!(exact, mag(6, 0));
    }

    #[test]
    fn test_checked_add_overflow() {
        let result = Magnitude::MAX.checked_add(mag(0, 1));
        assert_eq!(result, Err(MoneyError::NumericOverflow));

        let result = Magnitude::from_integer(u64::MAX).checked_add(mag(1, 0));
        assert_eq!(result, Err(MoneyError::NumericOverflow));
    }

    #[test]
    fn test_checked_sub_borrows() {
        let diff = mag(1, 10).checked_sub(mag(0, 25)).unwrap();
        assert_eq!(diff, mag(0, 85));

        let plain = mag(5, 50).checked_sub(mag(2, 25)).unwrap();
        assert_eq!(plain, mag(3, 25));
    }

    #[test]
    fn test_checked_sub_underflow() {
        assert_eq!(mag(0, 10).checked_sub(mag(5, 0)), None);
        assert_eq!(mag(0, 10).abs_diff(mag(5, 0)), mag(4, 90));
    }

    #[test]
    fn test_ordering() {
        assert!(mag(1, 0) > mag(0, 99));
        assert!(mag(3, 5) < mag(3, 6));
        assert_eq!(mag(7, 7).cmp(&mag(7, 7)), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_from_digits() {
        assert_eq!(Magnitude::from_digits("120", "05").unwrap(), mag(120, 5));
        assert_eq!(Magnitude::from_digits("10", "5").unwrap(), mag(10, 5));
        assert_eq!(
            Magnitude::from_digits("10", "150"),
            Err(MoneyError::FractionalOutOfRange)
        );
        assert_eq!(
            Magnitude::from_digits("", "10"),
            Err(MoneyError::InvalidFormat)
        );
        assert_eq!(
            Magnitude::from_digits("1a", "10"),
            Err(MoneyError::InvalidFormat)
        );
        assert_eq!(
            Magnitude::from_digits("18446744073709551616", "00"),
            Err(MoneyError::NumericOverflow)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(mag(120, 5).to_string(), "120.05");
        assert_eq!(Magnitude::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_decimal_bridge() {
        let d = mag(123, 45).to_decimal();
        assert_eq!(d, Decimal::new(12345, 2));

        assert_eq!(Magnitude::MAX.to_decimal().to_string(), "18446744073709551615.99");
    }

    #[test]
    fn test_from_hundredths() {
        assert_eq!(Magnitude::from_hundredths(12345).unwrap(), mag(123, 45));
        assert_eq!(
            Magnitude::from_hundredths(Magnitude::MAX.to_hundredths()).unwrap(),
            Magnitude::MAX
        );
        assert_eq!(
            Magnitude::from_hundredths(Magnitude::MAX.to_hundredths() + 1),
            Err(MoneyError::NumericOverflow)
        );
    }

    #[test]
    fn test_checked_mul_truncated() {
        // 130.90 * 0.85 = 111.265
        let product = mag(130, 90).checked_mul_truncated(Decimal::new(85, 2)).unwrap();
        assert_eq!(product, mag(111, 26));

        // 2.50 * 3 = 7.50
        let product = mag(2, 50).checked_mul_truncated(Decimal::from(3)).unwrap();
        assert_eq!(product, mag(7, 50));

        // sign of the factor is ignored
        let product = mag(10, 1).checked_mul_truncated(Decimal::new(-5, 1)).unwrap();
        assert_eq!(product, mag(5, 0));
    }

    #[test]
    fn test_checked_mul_truncated_keeps_all_factor_digits() {
        // 9.99 * 0.1001001001001001001001001001 = 0.999999999999999999999999999999
        let factor = Decimal::from_i128_with_scale(1_001_001_001_001_001_001_001_001_001, 28);
        let product = mag(9, 99).checked_mul_truncated(factor).unwrap();
        assert_eq!(product, mag(0, 99));

        // 9.99 * 1.1001001001001001001001001001 = 10.989999999999999999999999999999
        let factor = Decimal::from_i128_with_scale(11_001_001_001_001_001_001_001_001_001, 28);
        let product = mag(9, 99).checked_mul_truncated(factor).unwrap();
        assert_eq!(product, mag(10, 98));
    }

    #[test]
    fn test_checked_mul_truncated_overflow() {
        assert_eq!(
            Magnitude::MAX.checked_mul_truncated(Decimal::from(2)),
            Err(MoneyError::NumericOverflow)
        );
        assert_eq!(
            Magnitude::MAX.checked_mul_truncated(Decimal::ONE),
            Ok(Magnitude::MAX)
        );
        assert_eq!(
            Magnitude::MAX.checked_mul_truncated(Decimal::MAX),
            Err(MoneyError::NumericOverflow)
        );
    }

    quickcheck! {
        fn prop_add_then_sub_restores(a_int: u32, a_frac: u8, b_int: u32, b_frac: u8) -> bool {
            let a = mag(a_int as u64, (a_frac % 100) as u64);
            let b = mag(b_int as u64, (b_frac % 100) as u64);
            a.checked_add(b)
                .ok()
                .and_then(|sum| sum.checked_sub(b))
                == Some(a)
        }

        fn prop_hundredths_agree_with_u128(a_int: u32, a_frac: u8, b_int: u32, b_frac: u8) -> bool {
            let a = mag(a_int as u64, (a_frac % 100) as u64);
            let b = mag(b_int as u64, (b_frac % 100) as u64);
            let sum = a.checked_add(b).unwrap();
            let diff = a.abs_diff(b);
            sum.to_hundredths() == a.to_hundredths() + b.to_hundredths()
                && diff.to_hundredths() == a.to_hundredths().abs_diff(b.to_hundredths())
                && sum.fractional_part() < 100
                && diff.fractional_part() < 100
        }
    }
}
