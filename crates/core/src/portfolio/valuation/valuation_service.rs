use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;

use super::valuation_calculator::{enrich_holding, summarize};
use super::valuation_model::{EnrichedHolding, PortfolioSummary, PortfolioValuation};
use super::valuation_traits::ValuationServiceTrait;
use crate::errors::Result;
use crate::portfolio::holdings::{Holding, HoldingStoreTrait};
use crate::quotes::QuoteSourceTrait;

/// Enriches the store's holdings with live prices and derives the summary.
#[derive(Clone)]
pub struct ValuationService {
    store: Arc<dyn HoldingStoreTrait>,
    quote_source: Arc<dyn QuoteSourceTrait>,
    quote_timeout: Duration,
}

impl ValuationService {
    pub fn new(
        store: Arc<dyn HoldingStoreTrait>,
        quote_source: Arc<dyn QuoteSourceTrait>,
        quote_timeout: Duration,
    ) -> Self {
        Self {
            store,
            quote_source,
            quote_timeout,
        }
    }

    /// Fetch one price, mapping failure and timeout alike to `None`.
    async fn fetch_current_price(&self, symbol: &str) -> Option<Decimal> {
        let fetch = self.quote_source.fetch_price(symbol);
        match tokio::time::timeout(self.quote_timeout, fetch).await {
            Ok(Ok(price)) => Some(price),
            Ok(Err(e)) => {
                warn!("Price lookup for {} failed: {}. Leaving it unpriced.", symbol, e);
                None
            }
            Err(_) => {
                warn!(
                    "Price lookup for {} did not finish within {:?}. Leaving it unpriced.",
                    symbol, self.quote_timeout
                );
                None
            }
        }
    }

    /// Price every holding concurrently; results keep the input order.
    async fn enrich(&self, holdings: Vec<Holding>) -> Vec<EnrichedHolding> {
        let prices = join_all(
            holdings
                .iter()
                .map(|holding| self.fetch_current_price(&holding.symbol)),
        )
        .await;

        holdings
            .into_iter()
            .zip(prices)
            .map(|(holding, price)| enrich_holding(holding, price))
            .collect()
    }
}

#[async_trait]
impl ValuationServiceTrait for ValuationService {
    async fn list_enriched(&self) -> Result<Vec<EnrichedHolding>> {
        let holdings = self.store.list()?;
        Ok(self.enrich(holdings).await)
    }

    async fn summary(&self) -> Result<PortfolioSummary> {
        Ok(self.valuate().await?.summary)
    }

    async fn valuate(&self) -> Result<PortfolioValuation> {
        let holdings = self.store.list()?;
        if holdings.is_empty() {
            return Ok(PortfolioValuation {
                holdings: Vec::new(),
                summary: summarize(&[]),
                unpriced_symbols: Vec::new(),
                is_partial: false,
            });
        }
        debug!("Valuating {} holdings.", holdings.len());

        let enriched = self.enrich(holdings).await;
        let unpriced_symbols: Vec<String> = enriched
            .iter()
            .filter(|h| !h.is_priced())
            .map(|h| h.symbol().to_string())
            .collect();
        let summary = summarize(&enriched);

        if !unpriced_symbols.is_empty() {
            warn!(
                "Partial valuation: {} of {} holdings unpriced ({:?})",
                unpriced_symbols.len(),
                enriched.len(),
                unpriced_symbols
            );
        }

        Ok(PortfolioValuation {
            is_partial: !unpriced_symbols.is_empty(),
            holdings: enriched,
            summary,
            unpriced_symbols,
        })
    }
}
