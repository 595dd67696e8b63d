//! Holdings module - the portfolio's owned holding collection and the rules
//! for admitting holdings into it.

pub mod holdings_model;
mod holdings_service;
mod holdings_store;
mod holdings_traits;
pub mod holdings_validation;


pub use holdings_model::{Holding, NewHolding};
pub use holdings_service::HoldingsService;
pub use holdings_store::InMemoryHoldingStore;
pub use holdings_traits::{HoldingStoreTrait, HoldingsServiceTrait};
pub use holdings_validation::{normalize_symbol, validate_new_holding};
