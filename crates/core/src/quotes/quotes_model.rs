//! Quote domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price-per-share observation for an ISIN on a date.
///
/// Uniquely keyed by (isin, quote_date) in the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: i32,
    pub isin: String,
    pub quote_date: NaiveDate,
    pub price_per_share: Decimal,
    pub created_at: Option<DateTime<Utc>>,
}
