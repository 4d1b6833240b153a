// ============================================================================
// Domain Models Module
// Contains the money value type and the value objects it is built from
// ============================================================================

pub mod config;
pub mod currency;
pub mod money;
pub mod sign;

pub use config::RandomMoneyConfig;
pub use currency::Currency;
pub use money::Money;
pub use sign::Sign;
