//! Investment domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Instrument behavior classification.
///
/// A closed enumeration keyed by the numeric identifiers of the source
/// system. The kind decides which valuation rule applies; ids outside the
/// closed set are treated as unknown and valuate to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentKind {
    Fund,       // Value derived recursively from constituent instruments
    Equity,     // Priced via share count x latest quote
    RealEstate, // Priced via latest land + building value snapshots
}

impl InstrumentKind {
    /// Returns the numeric identifier used by the persistence layer.
    pub const fn as_id(&self) -> i32 {
        match self {
            InstrumentKind::Fund => 1,
            InstrumentKind::Equity => 2,
            InstrumentKind::RealEstate => 3,
        }
    }

    /// Parses an instrument kind from its numeric identifier.
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(InstrumentKind::Fund),
            2 => Some(InstrumentKind::Equity),
            3 => Some(InstrumentKind::RealEstate),
            _ => None,
        }
    }

    /// Static display name, used when no kind record is available.
    pub const fn display_name(&self) -> &'static str {
        match self {
            InstrumentKind::Fund => "Fund",
            InstrumentKind::Equity => "Stock",
            InstrumentKind::RealEstate => "Real Estate",
        }
    }
}

/// The persisted kind row, carrying the editable display name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentKindRecord {
    pub id: i32,
    pub name: String,
}

/// A valuable position trackable by the engine.
///
/// `fund_id` is set when this instrument is held inside a fund (it is that
/// fund's constituent). This is distinct from the instrument itself being of
/// kind [`InstrumentKind::Fund`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: i32,
    pub code: String,
    pub kind_id: Option<i32>,
    /// Set for equities only.
    pub isin: Option<String>,
    /// The fund this instrument belongs to, if any.
    pub fund_id: Option<i32>,
    /// Locality reference; carried for completeness, unused by valuation.
    pub city_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Investment {
    /// The instrument's kind, if the kind id is present and known.
    pub fn kind(&self) -> Option<InstrumentKind> {
        self.kind_id.and_then(InstrumentKind::from_id)
    }
}
