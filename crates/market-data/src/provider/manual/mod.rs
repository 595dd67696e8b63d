//! Manual market data provider.
//!
//! Answers from a fixed symbol -> price table. Used when no upstream API key
//! is configured and wherever a deterministic quote source is needed.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::MarketDataProvider;

const PROVIDER_ID: &str = "MANUAL";
const DEFAULT_CURRENCY: &str = "USD";

/// Quote provider backed by an in-memory price table.
#[derive(Default)]
pub struct ManualQuoteProvider {
    prices: HashMap<String, Decimal>,
}

impl ManualQuoteProvider {
    pub fn new(prices: HashMap<String, Decimal>) -> Self {
        let prices = prices
            .into_iter()
            .map(|(symbol, price)| (symbol.to_uppercase(), price))
            .collect();
        Self { prices }
    }

    /// Parse a table like `"AAPL=190.5, MSFT=410"`.
    ///
    /// Blank entries are skipped; anything else that is not `SYMBOL=PRICE`
    /// with a positive decimal price is rejected.
    pub fn from_spec(spec: &str) -> Result<Self, MarketDataError> {
        let mut prices = HashMap::new();
        for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (symbol, price) =
                entry
                    .split_once('=')
                    .ok_or_else(|| MarketDataError::ValidationFailed {
                        message: format!("Expected SYMBOL=PRICE, got '{}'", entry),
                    })?;
            let price = Decimal::from_str(price.trim())
                .ok()
                .filter(|p| *p > Decimal::ZERO)
                .ok_or_else(|| MarketDataError::ValidationFailed {
                    message: format!("Invalid price in '{}'", entry),
                })?;
            prices.insert(symbol.trim().to_uppercase(), price);
        }
        Ok(Self::new(prices))
    }
}

#[async_trait]
impl MarketDataProvider for ManualQuoteProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let symbol = symbol.to_uppercase();
        let price = self
            .prices
            .get(&symbol)
            .copied()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.clone()))?;
        Ok(Quote::new(symbol, price, DEFAULT_CURRENCY, PROVIDER_ID))
    }
}
