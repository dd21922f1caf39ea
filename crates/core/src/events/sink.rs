//! Valuation event sink trait and implementations.

use std::sync::{Arc, Mutex};

use log::warn;

use super::ValuationEvent;

/// Trait for receiving valuation events.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no DB writes)
/// - Implementations should queue events for async processing
/// - Failure to emit must not affect the valuation result (best-effort)
pub trait ValuationEventSink: Send + Sync {
    /// Emit a single valuation event.
    fn emit(&self, event: ValuationEvent);

    /// Emit multiple valuation events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<ValuationEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for contexts that don't need telemetry.
#[derive(Clone, Default)]
pub struct NoOpValuationEventSink;

impl ValuationEventSink for NoOpValuationEventSink {
    fn emit(&self, _event: ValuationEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Sink that forwards every event to the `log` facade as a warning.
#[derive(Clone, Default)]
pub struct LogValuationEventSink;

impl ValuationEventSink for LogValuationEventSink {
    fn emit(&self, event: ValuationEvent) {
        warn!("valuation event: {:?}", event);
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockValuationEventSink {
    events: Arc<Mutex<Vec<ValuationEvent>>>,
}

impl MockValuationEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<ValuationEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl ValuationEventSink for MockValuationEventSink {
    fn emit(&self, event: ValuationEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpValuationEventSink;
        sink.emit(ValuationEvent::MissingKind { investment_id: 1 });
        sink.emit_batch(vec![
            ValuationEvent::MissingKind { investment_id: 2 },
            ValuationEvent::MissingIsin { investment_id: 3 },
        ]);
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockValuationEventSink::new();
        assert!(sink.is_empty());

        sink.emit(ValuationEvent::MissingInstrument { investment_id: 1 });
        assert_eq!(sink.len(), 1);

        sink.emit_batch(vec![
            ValuationEvent::MissingKind { investment_id: 2 },
            ValuationEvent::FundWithoutConstituents { fund_id: 9 },
        ]);
        assert_eq!(sink.len(), 3);

        sink.clear();
        assert!(sink.is_empty());
    }
}
