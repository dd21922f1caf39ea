//! Investment (instrument) domain module.

pub mod investments_model;
pub mod investments_traits;


pub use investments_model::{InstrumentKind, InstrumentKindRecord, Investment};
pub use investments_traits::InvestmentRepositoryTrait;
