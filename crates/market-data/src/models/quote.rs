use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{Currency, ProviderId};

/// Latest market quote for one symbol
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker the quote was requested for (canonical uppercase)
    pub symbol: String,

    /// Current/last traded price (required)
    pub price: Decimal,

    /// Previous session close, when the provider reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<Decimal>,

    /// Change versus previous close in percent, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<Decimal>,

    /// Trading day the price belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_trading_day: Option<NaiveDate>,

    /// Quote currency
    pub currency: Currency,

    /// Source of the quote (MANUAL, ALPHA_VANTAGE, etc.)
    pub source: ProviderId,

    /// When the quote was fetched
    pub timestamp: DateTime<Utc>,
}

impl Quote {
    /// Create a new quote with minimal required fields
    pub fn new(
        symbol: impl Into<String>,
        price: Decimal,
        currency: impl Into<Currency>,
        source: impl Into<ProviderId>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            previous_close: None,
            change_percent: None,
            latest_trading_day: None,
            currency: currency.into(),
            source: source.into(),
            timestamp: Utc::now(),
        }
    }
}
