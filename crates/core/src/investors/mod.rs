//! Investor domain module.

pub mod investors_model;
pub mod investors_traits;

pub use investors_model::{Investor, InvestorInvestment};
pub use investors_traits::InvestorRepositoryTrait;
