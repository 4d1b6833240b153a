// ============================================================================
// Money Session
// Running balance that applies operations and reports them as events
// ============================================================================

use crate::domain::{Currency, Money};
use crate::interfaces::{EventHandler, MoneyEvent, Operation, SessionId};
use crate::numeric::{MoneyError, MoneyResult};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

/// A balance that add/subtract replace in place, plus an event stream.
///
/// `Money` itself is immutable; the session is where "mutation" lives. It
/// takes `&mut self` for operations that replace the balance, so each one
/// has exclusive access. A failed operation leaves the balance untouched
/// and emits [`MoneyEvent::Rejected`].
pub struct MoneySession {
    /// Correlates events from this session
    id: SessionId,

    /// Current balance
    balance: Money,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl MoneySession {
    /// Open a session and emit [`MoneyEvent::Created`].
    pub fn new(initial: Money, event_handler: Arc<dyn EventHandler>) -> Self {
        let session = Self {
            id: SessionId::new(),
            balance: initial,
            event_handler,
        };

        session.event_handler.on_event(MoneyEvent::Created {
            session_id: session.id,
            balance: initial,
            timestamp: Utc::now(),
        });

        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Add a signed amount to the balance.
    pub fn add(&mut self, sign: char, integer: u64, fractional: u64) -> MoneyResult<Money> {
        let result = self.balance.add(sign, integer, fractional);
        self.adjust(Operation::Add, result)
    }

    /// Subtract a signed amount from the balance.
    pub fn subtract(&mut self, sign: char, integer: u64, fractional: u64) -> MoneyResult<Money> {
        let result = self.balance.subtract(sign, integer, fractional);
        self.adjust(Operation::Subtract, result)
    }

    /// Convert the balance without replacing it.
    pub fn convert(&self, target: Currency, rate: Decimal) -> MoneyResult<Money> {
        match self.balance.convert(target, rate) {
            Ok(result) => {
                self.event_handler.on_event(MoneyEvent::Converted {
                    session_id: self.id,
                    source: self.balance,
                    result,
                    rate,
                    timestamp: Utc::now(),
                });
                Ok(result)
            },
            Err(reason) => Err(self.reject(Operation::Convert, reason)),
        }
    }

    /// `balance + other`, without replacing the balance.
    pub fn sum(&self, other: &Money) -> MoneyResult<Money> {
        self.combine(Operation::Sum, other, self.balance.sum(other))
    }

    /// `balance - other`, without replacing the balance.
    pub fn difference(&self, other: &Money) -> MoneyResult<Money> {
        self.combine(Operation::Difference, other, self.balance.difference(other))
    }

    fn adjust(&mut self, operation: Operation, result: MoneyResult<Money>) -> MoneyResult<Money> {
        let after = result.map_err(|reason| self.reject(operation, reason))?;
        let before = std::mem::replace(&mut self.balance, after);

        self.event_handler.on_event(MoneyEvent::Adjusted {
            session_id: self.id,
            operation,
            before,
            after,
            timestamp: Utc::now(),
        });

        Ok(after)
    }

    fn combine(
        &self,
        operation: Operation,
        other: &Money,
        result: MoneyResult<Money>,
    ) -> MoneyResult<Money> {
        let result = result.map_err(|reason| self.reject(operation, reason))?;

        self.event_handler.on_event(MoneyEvent::Combined {
            session_id: self.id,
            operation,
            other: *other,
            result,
            timestamp: Utc::now(),
        });

        Ok(result)
    }

    fn reject(&self, operation: Operation, reason: MoneyError) -> MoneyError {
        self.event_handler.on_event(MoneyEvent::Rejected {
            session_id: self.id,
            operation,
            reason,
            timestamp: Utc::now(),
        });
        reason
    }
}
