// ============================================================================
// Event Handler Interface
// Defines the contract for observing money session events
// ============================================================================

use crate::domain::Money;
use crate::numeric::MoneyError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies the session an event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Session operation names, used when an operation is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Subtract,
    Convert,
    Sum,
    Difference,
}

/// Events emitted by a money session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoneyEvent {
    /// Session opened with an initial balance
    Created {
        session_id: SessionId,
        balance: Money,
        timestamp: DateTime<Utc>,
    },

    /// Balance replaced by an add or subtract
    Adjusted {
        session_id: SessionId,
        operation: Operation,
        before: Money,
        after: Money,
        timestamp: DateTime<Utc>,
    },

    /// Balance converted into another currency (balance unchanged)
    Converted {
        session_id: SessionId,
        source: Money,
        result: Money,
        rate: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// Balance combined with another value (balance unchanged)
    Combined {
        session_id: SessionId,
        operation: Operation,
        other: Money,
        result: Money,
        timestamp: DateTime<Utc>,
    },

    /// Operation failed validation; balance unchanged
    Rejected {
        session_id: SessionId,
        operation: Operation,
        reason: MoneyError,
        timestamp: DateTime<Utc>,
    },
}

impl MoneyEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            MoneyEvent::Created { session_id, .. }
            | MoneyEvent::Adjusted { session_id, .. }
            | MoneyEvent::Converted { session_id, .. }
            | MoneyEvent::Combined { session_id, .. }
            | MoneyEvent::Rejected { session_id, .. } => *session_id,
        }
    }
}

/// Event handler trait for processing session events
/// Implementations can handle logging, auditing, display, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a session event
    fn on_event(&self, event: MoneyEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<MoneyEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: MoneyEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: MoneyEvent) {
        match &event {
            MoneyEvent::Rejected {
                operation, reason, ..
            } => tracing::warn!(?operation, %reason, "money operation rejected"),
            _ => tracing::debug!("Money session event: {:?}", event),
        }
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<MoneyEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the transcript so far
    pub fn events(&self) -> Vec<MoneyEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: MoneyEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Currency;

    fn created() -> MoneyEvent {
        MoneyEvent::Created {
            session_id: SessionId::new(),
            balance: Money::zero(Currency::Usd),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(created());
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_events(vec![
            created(),
            MoneyEvent::Rejected {
                session_id: SessionId::new(),
                operation: Operation::Convert,
                reason: MoneyError::InvalidRate,
                timestamp: Utc::now(),
            },
        ]);
    }

    #[test]
    fn test_recording_handler_keeps_order() {
        let handler = RecordingEventHandler::new();
        assert!(handler.is_empty());

        let first = created();
        let second = created();
        handler.on_events(vec![first.clone(), second.clone()]);

        assert_eq!(handler.len(), 2);
        assert_eq!(handler.events(), vec![first, second]);
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
        let event = created();
        assert_eq!(event.session_id(), event.session_id());
    }
}
