//! Stockfolio Market Data Crate
//!
//! Provider-agnostic quote fetching for the Stockfolio portfolio engine.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +----------------------+     +---------+
//! |   Core / caller  | --> |  MarketDataProvider  | --> |  Quote  |
//! +------------------+     +----------------------+     +---------+
//!                            |                |
//!                      AlphaVantage        Manual
//! ```
//!
//! A provider either returns the latest [`Quote`] for a ticker or fails with a
//! [`MarketDataError`]. Callers that value a whole portfolio treat every
//! failure the same way: the price for that one symbol is unknown.
//!
//! # Core Types
//!
//! - [`MarketDataProvider`] - Trait implemented by every quote source
//! - [`Quote`] - Latest price for one symbol
//! - [`AlphaVantageProvider`] - `GLOBAL_QUOTE` over HTTP
//! - [`ManualQuoteProvider`] - Fixed price table

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{Currency, ProviderId, Quote};

pub use provider::alpha_vantage::AlphaVantageProvider;
pub use provider::manual::ManualQuoteProvider;
pub use provider::MarketDataProvider;
