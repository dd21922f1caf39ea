//! Investment repository port.

use async_trait::async_trait;

use super::{InstrumentKindRecord, Investment};
use crate::errors::Result;

/// Read access to instruments, their kinds and fund membership.
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    /// Gets an instrument by id including its associations, or `None` if it
    /// does not exist.
    async fn get_investment_with_details(
        &self,
        investment_id: i32,
    ) -> Result<Option<Investment>>;

    /// Gets the persisted kind record for a kind id.
    async fn get_investment_kind(&self, kind_id: i32) -> Result<Option<InstrumentKindRecord>>;

    /// Gets all instruments whose owning-fund reference equals `fund_id`.
    async fn get_fund_investments(&self, fund_id: i32) -> Result<Vec<Investment>>;
}
