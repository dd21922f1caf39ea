//! Investor domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An investor holding zero or more investment positions.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub id: i32,
    pub code: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Membership edge linking an investor to an instrument.
///
/// The initial investment date/amount are informational and never enter the
/// valuation; point-in-time quantities come from the transaction ledger.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestorInvestment {
    pub investor_id: i32,
    pub investment_id: i32,
    pub initial_investment_date: Option<NaiveDate>,
    pub initial_amount: Option<Decimal>,
}
