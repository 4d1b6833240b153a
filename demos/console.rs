// ============================================================================
// Console Session Example
// Reads a starting balance from stdin and runs a scripted sequence on it
// ============================================================================

use fixed_money::prelude::*;
use rust_decimal::Decimal;
use std::io::{self, BufRead};
use std::sync::Arc;

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> io::Result<String> {
    println!("{}", message);
    let line = lines
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))??;
    Ok(line.trim().to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let currency: Currency = prompt(&mut lines, "Enter currency (USD, RUB, EUR):")?.parse()?;
    let sign = prompt(&mut lines, "Enter sign (+ or -):")?
        .chars()
        .next()
        .unwrap_or(' ');
    let integer: u64 = prompt(&mut lines, "Enter integer part:")?.parse()?;
    let fractional: u64 = prompt(&mut lines, "Enter fractional part (0 to 99):")?.parse()?;

    let initial = Money::new(currency, sign, integer, fractional)?;
    println!("Created money object: {}", initial);

    let mut session = MoneySession::new(initial, Arc::new(LoggingEventHandler));

    println!("After addition: {}", session.add('+', 20, 75)?);
    println!("After subtraction: {}", session.subtract('-', 10, 15)?);

    let converted = session.convert(Currency::Eur, Decimal::new(85, 2))?;
    println!("Converted to EUR: {}", converted);

    let copy = Money::copy_from(Some(&session.balance()))?;
    println!("Copy of balance: {}", copy);

    println!("Sum of balance and converted: {}", session.sum(&converted)?);
    println!(
        "Difference between balance and converted: {}",
        session.difference(&converted)?
    );

    Ok(())
}
