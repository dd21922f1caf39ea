//! Transaction ledger domain module.

pub mod transactions_model;
pub mod transactions_traits;

pub use transactions_model::{Transaction, TransactionKind};
pub use transactions_traits::TransactionRepositoryTrait;
