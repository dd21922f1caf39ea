//! Transaction domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction behavior classification.
///
/// The kind decides how a transaction's amount is interpreted:
/// `OwnershipPercentage` and `ShareCount` amounts are cumulative deltas,
/// `LandValue` and `BuildingValue` amounts are absolute point-in-time
/// snapshots of which only the latest one counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    OwnershipPercentage,
    ShareCount,
    LandValue,
    BuildingValue,
}

impl TransactionKind {
    /// Returns the numeric identifier used by the persistence layer.
    pub const fn as_id(&self) -> i32 {
        match self {
            TransactionKind::OwnershipPercentage => 1,
            TransactionKind::ShareCount => 2,
            TransactionKind::LandValue => 3,
            TransactionKind::BuildingValue => 4,
        }
    }

    /// Parses a transaction kind from its numeric identifier.
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(TransactionKind::OwnershipPercentage),
            2 => Some(TransactionKind::ShareCount),
            3 => Some(TransactionKind::LandValue),
            4 => Some(TransactionKind::BuildingValue),
            _ => None,
        }
    }

    /// True for kinds whose amounts accumulate over time.
    pub const fn is_cumulative(&self) -> bool {
        matches!(
            self,
            TransactionKind::OwnershipPercentage | TransactionKind::ShareCount
        )
    }
}

/// A signed ledger event against one instrument.
///
/// The amount carries no currency information; interpretation is purely by
/// kind.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i32,
    pub investment_id: i32,
    pub kind: TransactionKind,
    pub transaction_date: NaiveDate,
    pub amount: Decimal,
    pub created_at: Option<DateTime<Utc>>,
}
