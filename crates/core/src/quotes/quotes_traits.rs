use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use stockfolio_market_data::Quote;

/// Source of current prices consumed by the valuation pass.
///
/// Every failure (network, unknown symbol, malformed upstream payload) is
/// equivalent to the caller: the price is unknown. No retry contract.
#[async_trait]
pub trait QuoteSourceTrait: Send + Sync {
    /// Current price for a symbol; always strictly positive on success.
    async fn fetch_price(&self, symbol: &str) -> Result<Decimal, MarketDataError>;

    /// Full latest quote for a symbol.
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;
}
