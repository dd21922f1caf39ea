//! Valuation telemetry events.
//!
//! Data-quality findings made while valuating a portfolio (missing ISINs,
//! absent quotes, fund cycles, ...) are facts about the data, not failures
//! of the engine. Services report them through [`ValuationEventSink`] so the
//! host decides what to do with them; the engine never branches on whether
//! anyone is listening.

pub mod sink;
pub mod valuation_event;

pub use sink::{
    LogValuationEventSink, MockValuationEventSink, NoOpValuationEventSink, ValuationEventSink,
};
pub use valuation_event::ValuationEvent;
