use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::quotes_traits::QuoteSourceTrait;
use crate::errors::{MarketDataError, Result};
use crate::portfolio::holdings::holdings_validation::validate_symbol;
use stockfolio_market_data::{MarketDataProvider, Quote};

/// Adapts a market data provider to [`QuoteSourceTrait`].
///
/// Symbols are canonicalized before they reach the provider, and a
/// non-positive price is treated as a malformed upstream answer.
#[derive(Clone)]
pub struct QuoteService {
    provider: Arc<dyn MarketDataProvider>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    /// Latest quote for one symbol, for callers outside a valuation pass.
    ///
    /// Unlike valuation, a failure here is surfaced to the caller.
    pub async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        let symbol = validate_symbol(symbol)?;
        Ok(self.fetch_quote(&symbol).await?)
    }

    fn check_price(&self, symbol: &str, price: Decimal) -> std::result::Result<Decimal, MarketDataError> {
        if price <= Decimal::ZERO {
            return Err(MarketDataError::ValidationFailed {
                message: format!(
                    "{} returned non-positive price {} for {}",
                    self.provider.id(),
                    price,
                    symbol
                ),
            });
        }
        Ok(price)
    }
}

#[async_trait]
impl QuoteSourceTrait for QuoteService {
    async fn fetch_price(&self, symbol: &str) -> std::result::Result<Decimal, MarketDataError> {
        let symbol = symbol.trim().to_uppercase();
        let price = self.provider.get_latest_price(&symbol).await?;
        debug!("{}: {} @ {}", self.provider.id(), symbol, price);
        self.check_price(&symbol, price)
    }

    async fn fetch_quote(&self, symbol: &str) -> std::result::Result<Quote, MarketDataError> {
        let symbol = symbol.trim().to_uppercase();
        let quote = self.provider.get_latest_quote(&symbol).await?;
        self.check_price(&symbol, quote.price)?;
        Ok(quote)
    }
}
