//! Investor repository port.

use async_trait::async_trait;

use super::{Investor, InvestorInvestment};
use crate::errors::Result;

/// Read access to investors and their instrument memberships.
///
/// Implementations handle the actual storage operations; the engine only
/// consumes this trait.
#[async_trait]
pub trait InvestorRepositoryTrait: Send + Sync {
    /// Gets an investor by id, or `None` if it does not exist.
    async fn get_investor_by_id(&self, investor_id: i32) -> Result<Option<Investor>>;

    /// Gets all membership edges for an investor.
    async fn get_investor_investments(
        &self,
        investor_id: i32,
    ) -> Result<Vec<InvestorInvestment>>;
}
