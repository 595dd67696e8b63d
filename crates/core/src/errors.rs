//! Core error types for the Stockfolio engine.
//!
//! Validation failures are caller-correctable and carry one stable reason
//! each. Quote failures are normally absorbed by the valuation pass; they only
//! reach a caller through the single-symbol quote lookup.

use thiserror::Error;

pub use stockfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Holding not found: {0}")]
    NotFound(String),

    /// The holding collection could not be read or written. Fatal.
    #[error("Holding store unavailable: {0}")]
    Store(String),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Whether the caller can fix the request and try again.
    pub fn is_caller_correctable(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::NotFound(_))
    }
}

/// Rule violations reported when admitting a holding.
///
/// Rules are checked in declaration order; the first one violated is the one
/// reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Symbol '{0}' must be 1-5 letters")]
    InvalidSymbol(String),

    #[error("Invalid share quantity: {0}")]
    InvalidShares(String),

    #[error("Invalid purchase price: {0}")]
    InvalidPrice(String),

    #[error("Symbol '{0}' is already in the portfolio")]
    DuplicateSymbol(String),

    #[error("Maximum portfolio size ({0} holdings) reached")]
    CapacityExceeded(usize),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
