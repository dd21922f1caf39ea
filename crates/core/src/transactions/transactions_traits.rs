//! Transaction repository port.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{Transaction, TransactionKind};
use crate::errors::Result;

/// Read access to the transaction ledger.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Gets all transactions of one kind for an instrument dated on or
    /// before `end_date`.
    ///
    /// No ordering is guaranteed; callers must not rely on one.
    async fn get_transactions_for_investment(
        &self,
        investment_id: i32,
        kind: TransactionKind,
        end_date: NaiveDate,
    ) -> Result<Vec<Transaction>>;
}
