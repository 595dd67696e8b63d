use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stock position tracked in a portfolio.
///
/// Stored holdings never carry a market price; prices are attached only to
/// the enriched view produced by a valuation pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    /// Canonical uppercase ticker, unique within the portfolio
    pub symbol: String,
    pub name: Option<String>,
    pub shares: Decimal,
    /// Price per share at acquisition
    pub purchase_price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Holding {
    /// Build a stored holding from an already validated candidate.
    pub fn from_new(new_holding: NewHolding) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            symbol: new_holding.symbol,
            name: new_holding.name,
            shares: new_holding.shares,
            purchase_price: new_holding.purchase_price,
            created_at: Utc::now(),
        }
    }

    /// Amount paid for the position (`shares × purchase_price`), saturating
    /// at `Decimal::MAX`.
    pub fn cost_basis(&self) -> Decimal {
        self.shares.saturating_mul(self.purchase_price)
    }
}

/// Input model for adding a holding
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    pub shares: Decimal,
    pub purchase_price: Decimal,
}

impl NewHolding {
    pub fn new(symbol: impl Into<String>, shares: Decimal, purchase_price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            name: None,
            shares,
            purchase_price,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
