//! Quote repository port.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::Quote;
use crate::errors::Result;

/// Read access to price quotes.
#[async_trait]
pub trait QuoteRepositoryTrait: Send + Sync {
    /// Gets the single quote for `isin` with the maximum `quote_date` that is
    /// on or before `reference_date`, or `None` if no such quote exists.
    ///
    /// Never returns a future-dated quote; no interpolation is performed.
    async fn get_latest_quote_before_date(
        &self,
        isin: &str,
        reference_date: NaiveDate,
    ) -> Result<Option<Quote>>;
}
