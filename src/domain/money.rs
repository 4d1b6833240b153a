// ============================================================================
// Money Domain Model
// Signed-magnitude fixed-point amount tagged with a currency
// ============================================================================

use super::config::RandomMoneyConfig;
use super::currency::Currency;
use super::sign::Sign;
use crate::numeric::{Magnitude, MoneyError, MoneyResult};
use rand::Rng;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Monetary amount with two fractional digits and a currency.
///
/// Stored as a sign plus an unsigned [`Magnitude`], never as a
/// two's-complement or floating value. Every constructor and operation
/// returns a fresh value that satisfies:
///
/// - the fractional part is in `[0, 99]`
/// - zero is always `+0.00`, never `-0.00`
///
/// Equality covers sign, magnitude and currency. Ordering does not look at
/// currency: see [`Money::compare_amount`].
///
/// # Example
/// ```
/// use fixed_money::prelude::*;
///
/// let balance = Money::new(Currency::Usd, '+', 100, 0)?;
/// let balance = balance.add('+', 20, 75)?;
/// assert_eq!(balance.to_string(), "+120.75 USD");
///
/// let balance = balance.subtract('-', 10, 15)?;
/// assert_eq!(balance.to_string(), "+130.90 USD");
/// # Ok::<(), MoneyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Money {
    sign: Sign,
    magnitude: Magnitude,
    currency: Currency,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build from a magnitude, forcing zero to a positive sign.
    #[inline]
    pub const fn from_magnitude(currency: Currency, sign: Sign, magnitude: Magnitude) -> Self {
        let sign = if magnitude.is_zero() { Sign::Plus } else { sign };
        Self {
            sign,
            magnitude,
            currency,
        }
    }

    /// Zero in the given currency.
    #[inline]
    pub const fn zero(currency: Currency) -> Self {
        Self::from_magnitude(currency, Sign::Plus, Magnitude::ZERO)
    }

    /// Create from explicit fields with a character sign.
    ///
    /// # Errors
    /// - `InvalidSign` if `sign` is not `'+'` or `'-'`
    /// - `FractionalOutOfRange` if `fractional >= 100`
    pub fn new(currency: Currency, sign: char, integer: u64, fractional: u64) -> MoneyResult<Self> {
        Self::from_parts(currency, Sign::try_from(sign)?, integer, fractional)
    }

    /// Create from explicit fields with a typed sign.
    ///
    /// # Errors
    /// Returns `FractionalOutOfRange` if `fractional >= 100`.
    pub fn from_parts(
        currency: Currency,
        sign: Sign,
        integer: u64,
        fractional: u64,
    ) -> MoneyResult<Self> {
        let magnitude = Magnitude::new(integer, fractional)?;
        Ok(Self::from_magnitude(currency, sign, magnitude))
    }

    /// Copy a value that may be absent.
    ///
    /// `Money` is `Copy`, so this only matters at boundaries where the
    /// source is optional.
    ///
    /// # Errors
    /// Returns `NullInput` if `source` is `None`.
    pub fn copy_from(source: Option<&Money>) -> MoneyResult<Self> {
        source.copied().ok_or(MoneyError::NullInput)
    }

    /// Parse the canonical textual form, e.g. `"+120.05 USD"`.
    ///
    /// Equivalent to `s.parse::<Money>()`.
    pub fn parse(s: &str) -> MoneyResult<Self> {
        s.parse()
    }

    /// Draw a value with a fair-coin sign, integer part in `[0, 1000)`,
    /// fractional part in `[0, 100)` and a uniformly chosen currency.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let sign = if rng.gen_bool(0.5) {
            Sign::Minus
        } else {
            Sign::Plus
        };
        let magnitude = Self::random_magnitude(rng, RandomMoneyConfig::DEFAULT_INTEGER_BOUND);
        Self::from_magnitude(rng.gen(), sign, magnitude)
    }

    /// Draw a value using custom bounds and currencies.
    ///
    /// # Errors
    /// Returns `InvalidFormat` if `config` does not validate.
    pub fn random_with<R: Rng + ?Sized>(
        rng: &mut R,
        config: &RandomMoneyConfig,
    ) -> MoneyResult<Self> {
        if let Err(reason) = config.validate() {
            tracing::debug!(%reason, "rejected random money config");
            return Err(MoneyError::InvalidFormat);
        }

        let sign = if rng.gen_bool(config.negative_probability) {
            Sign::Minus
        } else {
            Sign::Plus
        };
        let magnitude = Self::random_magnitude(rng, config.integer_bound);
        let currency = config.currencies[rng.gen_range(0..config.currencies.len())];

        Ok(Self::from_magnitude(currency, sign, magnitude))
    }

    fn random_magnitude<R: Rng + ?Sized>(rng: &mut R, integer_bound: u64) -> Magnitude {
        let integer = rng.gen_range(0..integer_bound);
        let fractional = rng.gen_range(0..Magnitude::SCALE);
        // fractional is drawn below SCALE, so construction cannot fail
        Magnitude::new(integer, fractional).unwrap_or(Magnitude::ZERO)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub const fn integer_part(&self) -> u64 {
        self.magnitude.integer_part()
    }

    /// Hundredths, always in `[0, 99]`.
    #[inline]
    pub const fn fractional_part(&self) -> u8 {
        self.magnitude.fractional_part()
    }

    #[inline]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    #[inline]
    pub const fn magnitude(&self) -> Magnitude {
        self.magnitude
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Canonical string, identical to `to_string()`.
    pub fn display(&self) -> String {
        self.to_string()
    }

    /// Exact signed decimal value.
    pub fn to_decimal(&self) -> Decimal {
        let value = self.magnitude.to_decimal();
        if self.sign.is_negative() {
            -value
        } else {
            value
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Add a signed amount given as raw fields.
    ///
    /// Adding a negative amount subtracts its magnitude.
    ///
    /// # Errors
    /// - `InvalidSign` if `sign` is not `'+'` or `'-'`
    /// - `FractionalOutOfRange` if `fractional >= 100`
    /// - `NumericOverflow` if the integer part exceeds u64::MAX
    pub fn add(&self, sign: char, integer: u64, fractional: u64) -> MoneyResult<Self> {
        let sign = Sign::try_from(sign)?;
        self.add_signed(sign, Magnitude::new(integer, fractional)?)
    }

    /// Subtract a signed amount given as raw fields.
    ///
    /// Subtracting a negative amount adds its magnitude. Subtracting more
    /// than the balance crosses zero and flips the sign.
    ///
    /// # Errors
    /// Same as [`Money::add`].
    pub fn subtract(&self, sign: char, integer: u64, fractional: u64) -> MoneyResult<Self> {
        let sign = Sign::try_from(sign)?;
        self.subtract_signed(sign, Magnitude::new(integer, fractional)?)
    }

    /// Add a signed magnitude.
    pub fn add_signed(&self, sign: Sign, operand: Magnitude) -> MoneyResult<Self> {
        match sign {
            Sign::Minus => self.subtract_signed(Sign::Plus, operand),
            Sign::Plus => self.offset(Sign::Plus, operand),
        }
    }

    /// Subtract a signed magnitude.
    pub fn subtract_signed(&self, sign: Sign, operand: Magnitude) -> MoneyResult<Self> {
        match sign {
            Sign::Minus => self.add_signed(Sign::Plus, operand),
            Sign::Plus => self.offset(Sign::Minus, operand),
        }
    }

    /// Move the amount by `operand` in the direction of `direction`.
    fn offset(&self, direction: Sign, operand: Magnitude) -> MoneyResult<Self> {
        let (sign, magnitude) = if direction == self.sign {
            (self.sign, self.magnitude.checked_add(operand)?)
        } else {
            match self.magnitude.checked_sub(operand) {
                Some(remaining) => (self.sign, remaining),
                // Operand outweighs the balance: swap roles and cross zero
                None => (direction, operand.abs_diff(self.magnitude)),
            }
        };

        Ok(Self::from_magnitude(self.currency, sign, magnitude))
    }

    /// `self + other`, keeping the currency of `self`.
    ///
    /// No conversion is applied; `other`'s currency is ignored.
    pub fn sum(&self, other: &Money) -> MoneyResult<Self> {
        self.add_signed(other.sign, other.magnitude)
    }

    /// `self - other`, keeping the currency of `self`.
    ///
    /// No conversion is applied; `other`'s currency is ignored.
    pub fn difference(&self, other: &Money) -> MoneyResult<Self> {
        self.subtract_signed(other.sign, other.magnitude)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare by sign, then integer part, then fractional part, ignoring
    /// currency.
    ///
    /// Negative amounts order before positive ones. Two negative amounts
    /// compare by magnitude like positive ones, so `-5.00` orders above
    /// `-3.00`.
    pub fn compare_amount(&self, other: &Self) -> Ordering {
        self.sign
            .cmp(&other.sign)
            .then_with(|| self.integer_part().cmp(&other.integer_part()))
            .then_with(|| self.fractional_part().cmp(&other.fractional_part()))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert into `target` at `rate` units of `target` per unit of `self`.
    ///
    /// The product is computed exactly from the rate's mantissa and scale
    /// and truncated toward zero to two fractional digits. The sign is
    /// taken from the source, since the rate is positive.
    ///
    /// # Errors
    /// - `InvalidRate` if `rate <= 0`
    /// - `NumericOverflow` if the product does not fit
    pub fn convert(&self, target: Currency, rate: Decimal) -> MoneyResult<Self> {
        if rate <= Decimal::ZERO {
            return Err(MoneyError::InvalidRate);
        }

        let magnitude = self.magnitude.checked_mul_truncated(rate)?;
        let converted = Self::from_magnitude(target, self.sign, magnitude);

        tracing::trace!(source = %self, %rate, result = %converted, "converted money");

        Ok(converted)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for Money {
    /// Amounts in different currencies are unordered, which keeps
    /// `partial_cmp` consistent with `==`. Use [`Money::compare_amount`]
    /// for a currency-blind order.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.compare_amount(other))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_magnitude(self.currency, self.sign.flip(), self.magnitude)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {}", self.sign, self.magnitude, self.currency)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Money {
    type Err = MoneyError;

    /// Parse `<sign><digits>(.|,)<digits> <currency>`.
    ///
    /// # Examples
    /// - "+120.05 USD" -> +120.05 USD
    /// - "-3,50 eur" -> -3.50 EUR
    /// - "+10.5 RUB" -> +10.05 RUB (the fraction counts hundredths)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let sign = match chars.next() {
            Some(c) => Sign::try_from(c).map_err(|_| MoneyError::InvalidFormat)?,
            None => return Err(MoneyError::EmptyInput),
        };

        // Digits must follow the sign directly
        let rest = chars.as_str();
        if rest.starts_with(char::is_whitespace) {
            return Err(MoneyError::InvalidFormat);
        }

        let mut tokens = rest.split_whitespace();
        let (amount, currency) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(amount), Some(currency), None) => (amount, currency),
            _ => return Err(MoneyError::InvalidFormat),
        };

        let mut groups = amount.split(['.', ',']);
        let magnitude = match (groups.next(), groups.next(), groups.next()) {
            (Some(integer), Some(fractional), None) => {
                Magnitude::from_digits(integer, fractional)?
            },
            _ => return Err(MoneyError::InvalidFormat),
        };

        let currency: Currency = currency.parse()?;

        Ok(Self::from_magnitude(currency, sign, magnitude))
    }
}

impl TryFrom<String> for Money {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(money: Money) -> String {
        money.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
