// ============================================================================
// Currency
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed set of supported currencies.
///
/// Adding a variant is a breaking change; there is no runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Currency {
    /// United States dollar
    Usd,
    /// Russian ruble
    Rub,
    /// Euro
    Eur,
}

impl Currency {
    /// Every currency, in declaration order.
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Rub, Currency::Eur];

    /// Three-letter code used in the textual money format.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Rub => "RUB",
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    /// Parse a currency code, ignoring ASCII case (`"usd"`, `"Usd"`, `"USD"`).
    fn from_str(s: &str) -> MoneyResult<Self> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(s))
            .ok_or(MoneyError::InvalidFormat)
    }
}

impl Distribution<Currency> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Currency {
        Currency::ALL[rng.gen_range(0..Currency::ALL.len())]
    }
}
