// ============================================================================
// Numeric Module
// Unsigned fixed-point magnitudes and the error vocabulary for money values
// ============================================================================
//
// This module provides:
// - Magnitude: non-negative amount as (u64 integer, u8 hundredths)
// - MoneyError: Error kinds for construction, arithmetic and conversion
//
// Design principles:
// - No floating-point operations
// - All fallible arithmetic returns Result (no panics)
// - Sign is never stored here; magnitudes cannot go below zero
// - Decimal bridging via rust_decimal for exact conversion math

mod errors;
mod magnitude;

pub use errors::{MoneyError, MoneyResult};
pub use magnitude::Magnitude;
