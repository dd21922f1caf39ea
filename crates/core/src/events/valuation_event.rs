//! Valuation event types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::transactions::TransactionKind;

/// Events emitted by the valuation service while computing a portfolio.
///
/// Every event corresponds to a non-fatal condition that resolved an
/// instrument (or one of its value components) to zero. The valuation call
/// itself still succeeds; runtime adapters translate these into warnings,
/// metrics or audit records.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValuationEvent {
    /// A membership edge referenced an instrument record that does not exist.
    MissingInstrument { investment_id: i32 },

    /// The instrument has no kind assigned and cannot be valuated.
    MissingKind { investment_id: i32 },

    /// The instrument's kind id is outside the closed kind enumeration.
    UnknownKind { investment_id: i32, kind_id: i32 },

    /// An equity instrument has no ISIN and cannot be priced.
    MissingIsin { investment_id: i32 },

    /// No quote dated on or before the reference date exists for the ISIN.
    QuoteNotFound {
        isin: String,
        reference_date: NaiveDate,
    },

    /// A real-estate instrument has no snapshot transactions of the given
    /// kind on or before the reference date.
    SnapshotMissing {
        investment_id: i32,
        kind: TransactionKind,
    },

    /// The recursive fund descent revisited an instrument already on the
    /// active resolution path.
    CycleDetected { investment_id: i32 },

    /// A fund holds no constituent instruments.
    FundWithoutConstituents { fund_id: i32 },

    /// Valuating one instrument failed unexpectedly; the instrument was
    /// skipped and the rest of the portfolio computed normally.
    ValuationFailed {
        investment_id: i32,
        error: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valuation_event_serialization() {
        let event = ValuationEvent::QuoteNotFound {
            isin: "DE0001".to_string(),
            reference_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("quote_not_found"));
        assert!(json.contains("DE0001"));

        let deserialized: ValuationEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }

    #[test]
    fn test_cycle_event_tag() {
        let event = ValuationEvent::CycleDetected { investment_id: 7 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("cycle_detected"));
    }
}
