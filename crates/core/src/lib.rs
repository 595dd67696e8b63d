//! Stockfolio Core - Portfolio valuation and aggregation engine.
//!
//! This crate owns holding records, enforces the portfolio's admission rules,
//! prices holdings through a quote source and derives per-holding and
//! portfolio-level metrics. It keeps holdings in process memory only and has
//! no transport layer; `apps/server` wires it to HTTP.
//!
//! A portfolio is one explicitly owned [`InMemoryHoldingStore`] shared by
//! `Arc` between the [`HoldingsService`] (mutations) and the
//! [`ValuationService`] (reads with live prices).

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod quotes;
pub mod settings;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
