use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::Holding;

/// A holding with a freshly fetched price and the metrics derived from it.
///
/// Built per query and never cached; prices are time-sensitive.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedHolding {
    #[serde(flatten)]
    pub holding: Holding,
    /// Absent when the quote lookup failed or timed out
    pub current_price: Option<Decimal>,
    /// `shares × (current_price ?? purchase_price)`
    pub market_value: Decimal,
    /// `(current_price − purchase_price) × shares`, only when priced
    pub gain_loss: Option<Decimal>,
    /// `(current_price − purchase_price) / purchase_price × 100`, only when priced
    pub percent_change: Option<Decimal>,
}

impl EnrichedHolding {
    pub fn symbol(&self) -> &str {
        &self.holding.symbol
    }

    pub fn is_priced(&self) -> bool {
        self.current_price.is_some()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformer {
    pub symbol: String,
    pub percent_change: Decimal,
    pub gain_loss: Decimal,
}

/// Portfolio-level figures derived from one set of enriched holdings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub total_investment: Decimal,
    /// Only priced holdings contribute; unpriced ones count as zero
    pub total_gain_loss: Decimal,
    /// Zero when nothing has been invested
    pub gain_loss_percentage: Decimal,
    pub top_performer: Option<TopPerformer>,
    pub holding_count: usize,
    pub priced_count: usize,
}

/// Result of one enrichment pass: holdings and summary built from the same
/// prices.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    pub holdings: Vec<EnrichedHolding>,
    pub summary: PortfolioSummary,
    /// Symbols whose quote failed or did not complete in time
    pub unpriced_symbols: Vec<String>,
    pub is_partial: bool,
}
