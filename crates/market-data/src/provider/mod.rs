//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - Concrete provider implementations (Alpha Vantage, manual price table)

mod traits;

pub mod alpha_vantage;
pub mod manual;

pub use traits::MarketDataProvider;
