//! Quote lookup module.
//!
//! The valuation pass depends on [`QuoteSourceTrait`] only. [`QuoteService`]
//! is the adapter from the market-data crate's providers to that seam:
//!
//! ```text
//! ValuationService → QuoteSourceTrait ← QuoteService → MarketDataProvider
//!                                                       (AlphaVantage, Manual)
//! ```

mod quotes_service;
mod quotes_traits;

pub use quotes_service::QuoteService;
pub use quotes_traits::QuoteSourceTrait;

pub use stockfolio_market_data::{MarketDataError, Quote};
