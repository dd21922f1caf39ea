//! Portfolio-level services.

pub mod valuation;

pub use valuation::*;
