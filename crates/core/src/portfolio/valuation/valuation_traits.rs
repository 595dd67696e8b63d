use async_trait::async_trait;

use super::valuation_model::{EnrichedHolding, PortfolioSummary, PortfolioValuation};
use crate::errors::Result;

/// Live valuation of a portfolio.
///
/// Quote failures never fail these calls; only an unreadable holding store
/// does.
#[async_trait]
pub trait ValuationServiceTrait: Send + Sync {
    /// Holdings in insertion order with current prices attached.
    async fn list_enriched(&self) -> Result<Vec<EnrichedHolding>>;

    /// Portfolio totals and top performer.
    async fn summary(&self) -> Result<PortfolioSummary>;

    /// Holdings and summary from a single enrichment pass.
    async fn valuate(&self) -> Result<PortfolioValuation>;
}
