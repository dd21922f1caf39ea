//! Valuation result models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One valued instrument inside a portfolio valuation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentValuation {
    pub instrument_id: i32,
    pub instrument_code: String,
    pub instrument_type_name: String,
    pub value: Decimal,
    /// Share of the portfolio total, rounded to two decimal places.
    /// Stays zero when the portfolio total is zero.
    pub percentage_of_portfolio: Decimal,
}

/// The transient result of one portfolio valuation call.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    pub investor_id: i32,
    pub investor_code: String,
    pub reference_date: NaiveDate,
    pub calculation_timestamp: DateTime<Utc>,
    pub total_value: Decimal,
    /// Instruments that valuated above zero; zero-valued holdings are
    /// omitted from the breakdown.
    pub instruments: Vec<InstrumentValuation>,
}

impl PortfolioValuation {
    /// An empty valuation for an investor without holdings.
    pub fn empty(investor_id: i32, investor_code: String, reference_date: NaiveDate) -> Self {
        PortfolioValuation {
            investor_id,
            investor_code,
            reference_date,
            calculation_timestamp: Utc::now(),
            total_value: Decimal::ZERO,
            instruments: Vec::new(),
        }
    }
}
