// ============================================================================
// Random Money Configuration
// Bounds and currency set for randomized construction
// ============================================================================

use super::currency::Currency;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`Money::random_with`](super::Money::random_with).
///
/// The defaults reproduce [`Money::random`](super::Money::random):
/// integer part in `[0, 1000)`, a fair coin for the sign and any currency.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RandomMoneyConfig {
    /// Exclusive upper bound for the integer part
    pub integer_bound: u64,

    /// Probability of drawing a negative sign (0.0 - 1.0)
    pub negative_probability: f64,

    /// Currencies to draw from uniformly
    pub currencies: Vec<Currency>,
}

impl RandomMoneyConfig {
    /// Default exclusive upper bound for the integer part
    pub const DEFAULT_INTEGER_BOUND: u64 = 1000;

    /// Create a configuration with the default bounds
    pub fn new() -> Self {
        Self {
            integer_bound: Self::DEFAULT_INTEGER_BOUND,
            negative_probability: 0.5,
            currencies: Currency::ALL.to_vec(),
        }
    }

    /// Builder method: Set the exclusive integer bound
    pub fn with_integer_bound(mut self, bound: u64) -> Self {
        self.integer_bound = bound;
        self
    }

    /// Builder method: Set the probability of a negative sign
    pub fn with_negative_probability(mut self, probability: f64) -> Self {
        self.negative_probability = probability;
        self
    }

    /// Builder method: Restrict the currencies to draw from
    pub fn with_currencies(mut self, currencies: impl IntoIterator<Item = Currency>) -> Self {
        self.currencies = currencies.into_iter().collect();
        self
    }

    /// Builder method: Always use a single currency
    pub fn only(self, currency: Currency) -> Self {
        self.with_currencies([currency])
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.integer_bound == 0 {
            return Err("Integer bound must be positive".to_string());
        }

        if !(0.0..=1.0).contains(&self.negative_probability) {
            return Err("Negative probability must be between 0 and 1".to_string());
        }

        if self.currencies.is_empty() {
            return Err("At least one currency is required".to_string());
        }

        Ok(())
    }
}

impl Default for RandomMoneyConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RandomMoneyConfig::default();

        assert_eq!(config.integer_bound, 1000);
        assert_eq!(config.negative_probability, 0.5);
        assert_eq!(config.currencies, Currency::ALL.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RandomMoneyConfig::new()
            .with_integer_bound(10)
            .with_negative_probability(0.0)
            .only(Currency::Eur);

        assert_eq!(config.integer_bound, 10);
        assert_eq!(config.negative_probability, 0.0);
        assert_eq!(config.currencies, vec![Currency::Eur]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(RandomMoneyConfig::new()
            .with_integer_bound(0)
            .validate()
            .is_err());
        assert!(RandomMoneyConfig::new()
            .with_negative_probability(1.5)
            .validate()
            .is_err());
        assert!(RandomMoneyConfig::new()
            .with_negative_probability(f64::NAN)
            .validate()
            .is_err());
        assert!(RandomMoneyConfig::new()
            .with_currencies(Vec::<Currency>::new())
            .validate()
            .is_err());
    }
}
