//! Market data provider trait definitions.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new quote source. A provider
/// receives a canonical (uppercase) ticker and either answers with the
/// latest quote or fails; retries and rate limiting are not its concern
/// at this layer.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stockfolio_market_data::{MarketDataError, MarketDataProvider, Quote};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
///         // ... call the upstream API
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "ALPHA_VANTAGE" or "MANUAL".
    /// Used for logging and as the `source` of returned quotes.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a symbol.
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Fetch only the latest price for a symbol.
    ///
    /// Default implementation takes the price of [`get_latest_quote`](Self::get_latest_quote).
    async fn get_latest_price(&self, symbol: &str) -> Result<Decimal, MarketDataError> {
        self.get_latest_quote(symbol).await.map(|quote| quote.price)
    }
}
