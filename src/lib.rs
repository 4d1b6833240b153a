// ============================================================================
// Fixed Money Library
// Signed-magnitude fixed-point money with currency tagging and conversion
// ============================================================================

//! # Fixed Money
//!
//! A two-decimal monetary value type built on signed magnitudes.
//!
//! ## Features
//!
//! - **Signed-magnitude storage**: sign kept apart from an unsigned
//!   integer/hundredths pair, with explicit carry and borrow
//! - **Immutable values**: every operation returns a new `Money`
//! - **Canonical text format**: `+120.05 USD`, parsed and displayed losslessly
//! - **Exact conversion**: integer multiplication by a decimal rate, truncated to cents
//! - **Injected randomness** for reproducible test data
//!
//! ## Example
//!
//! ```rust
//! use fixed_money::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let balance: Money = "+100.00 USD".parse()?;
//! let balance = balance.add('+', 20, 75)?;
//! let balance = balance.subtract('-', 10, 15)?;
//! assert_eq!(balance.to_string(), "+130.90 USD");
//!
//! // 130.90 * 0.85 = 111.265, truncated
//! let euros = balance.convert(Currency::Eur, Decimal::new(85, 2))?;
//! assert_eq!(euros.to_string(), "+111.26 EUR");
//!
//! // Crossing zero flips the sign
//! let overdrawn = Money::new(Currency::Usd, '+', 0, 10)?.subtract('+', 5, 0)?;
//! assert_eq!(overdrawn.to_string(), "-4.90 USD");
//! # Ok::<(), MoneyError>(())
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Currency, Money, RandomMoneyConfig, Sign};
    pub use crate::engine::MoneySession;
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, MoneyEvent, NoOpEventHandler, Operation,
        RecordingEventHandler, SessionId,
    };
    pub use crate::numeric::{Magnitude, MoneyError, MoneyResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_session() {
        let recorder = Arc::new(RecordingEventHandler::new());
        let initial = Money::parse("+100.00 usd").unwrap();
        let mut session = MoneySession::new(initial, recorder.clone());

        session.add('+', 20, 75).unwrap();
        session.subtract('-', 10, 15).unwrap();
        let euros = session.convert(Currency::Eur, Decimal::new(85, 2)).unwrap();

        // Display output parses back to the same value
        let reparsed: Money = euros.to_string().parse().unwrap();
        assert_eq!(reparsed, euros);

        assert_eq!(session.balance().to_string(), "+130.90 USD");
        assert!(recorder
            .events()
            .iter()
            .any(|e| matches!(e, MoneyEvent::Converted { .. })));
    }

    #[test]
    fn test_random_values_round_trip() {
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..1000 {
            let m = Money::random(&mut rng);
            assert_eq!(Money::parse(&m.display()), Ok(m));
            assert!(m.fractional_part() <= 99);
        }
    }

    #[test]
    fn test_documented_parse_failures() {
        let cases = [
            ("abc", MoneyError::InvalidFormat),
            ("", MoneyError::EmptyInput),
            ("+10.5.5 USD", MoneyError::InvalidFormat),
            ("+10.150 USD", MoneyError::FractionalOutOfRange),
        ];

        for (input, expected) in cases {
            assert_eq!(Money::parse(input), Err(expected), "input: {input:?}");
        }
    }
}
