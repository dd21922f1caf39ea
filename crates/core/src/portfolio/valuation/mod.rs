//! Point-in-time portfolio valuation.
//!
//! Values an investor's holdings as of a reference date by recursively
//! resolving the instrument graph (equities, real estate, funds-of-funds)
//! into a monetary total plus a per-instrument breakdown.

pub mod valuation_model;
pub mod valuation_service;


pub use valuation_model::{InstrumentValuation, PortfolioValuation};
pub use valuation_service::{PortfolioValuationService, PortfolioValuationServiceTrait};
