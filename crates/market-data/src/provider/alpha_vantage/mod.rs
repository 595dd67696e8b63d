//! Alpha Vantage market data provider implementation.
//!
//! Latest prices come from the `GLOBAL_QUOTE` endpoint. A symbol the API does
//! not know answers with an empty `Global Quote` object rather than an HTTP
//! error, so an empty payload is reported as `SymbolNotFound`.
//!
//! Note: Alpha Vantage free tier is limited to 5 API calls per minute. Throttled
//! calls come back as HTTP 200 with a `Note` or `Information` message.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::MarketDataProvider;

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER_ID: &str = "ALPHA_VANTAGE";
const DEFAULT_CURRENCY: &str = "USD";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Alpha Vantage market data provider.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

// ============================================================================
// Response structures for Alpha Vantage API
// ============================================================================

/// GLOBAL_QUOTE response
#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    symbol: Option<String>,
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "07. latest trading day")]
    latest_trading_day: Option<String>,
    #[serde(rename = "08. previous close")]
    previous_close: Option<String>,
    #[serde(rename = "10. change percent")]
    change_percent: Option<String>,
}

// ============================================================================
// AlphaVantageProvider implementation
// ============================================================================

impl AlphaVantageProvider {
    /// Create a new Alpha Vantage provider with the given API key.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Create a provider pointed at a different endpoint (proxies, tests).
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Make a request to the Alpha Vantage API.
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", self.api_key.as_str()));

        let url = reqwest::Url::parse_with_params(&self.base_url, &all_params).map_err(|e| {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build URL: {}", e),
            }
        })?;

        debug!(
            "Alpha Vantage request: {}",
            url.as_str().replace(&self.api_key, "***")
        );

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })
    }

    /// Check for API-level errors in the response.
    fn check_api_error(
        error_message: &Option<String>,
        note: &Option<String>,
        information: &Option<String>,
    ) -> Result<(), MarketDataError> {
        if let Some(ref msg) = error_message {
            if msg.contains("Invalid API call") || msg.contains("not found") {
                return Err(MarketDataError::SymbolNotFound(msg.clone()));
            }
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: msg.clone(),
            });
        }

        // A GLOBAL_QUOTE body carrying only a note or information message has
        // no quote in it, so anything left here is a failure.
        for msg in [note, information].into_iter().flatten() {
            if msg.contains("API call frequency")
                || msg.contains("rate limit")
                || msg.contains("requests per day")
            {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            warn!("Alpha Vantage message: {}", msg);
        }

        Ok(())
    }

    /// Parse a date string in YYYY-MM-DD format.
    fn parse_date(date_str: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").ok()
    }

    /// Parse a decimal value from a string.
    fn parse_decimal(s: &str) -> Option<Decimal> {
        Decimal::from_str(s.trim()).ok()
    }

    /// Parse a percentage like "1.2345%" into 1.2345.
    fn parse_percent(s: &str) -> Option<Decimal> {
        Self::parse_decimal(s.trim().trim_end_matches('%'))
    }

    /// Turn a parsed GLOBAL_QUOTE body into a [`Quote`].
    fn parse_global_quote(symbol: &str, text: &str) -> Result<Quote, MarketDataError> {
        let response: GlobalQuoteResponse =
            serde_json::from_str(text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse response: {}", e),
            })?;

        Self::check_api_error(
            &response.error_message,
            &response.note,
            &response.information,
        )?;

        let global_quote = response.global_quote.unwrap_or_default();

        let raw_price = match global_quote.price {
            Some(ref price) => price,
            None if global_quote.symbol.is_none() => {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            None => {
                return Err(MarketDataError::ValidationFailed {
                    message: format!("Missing price for {}", symbol),
                });
            }
        };

        let price = Self::parse_decimal(raw_price)
            .filter(|p| *p > Decimal::ZERO)
            .ok_or_else(|| MarketDataError::ValidationFailed {
                message: format!("Invalid price '{}' for {}", raw_price, symbol),
            })?;

        let mut quote = Quote::new(symbol, price, DEFAULT_CURRENCY, PROVIDER_ID);
        quote.previous_close = global_quote
            .previous_close
            .as_deref()
            .and_then(Self::parse_decimal);
        quote.change_percent = global_quote
            .change_percent
            .as_deref()
            .and_then(Self::parse_percent);
        quote.latest_trading_day = global_quote
            .latest_trading_day
            .as_deref()
            .and_then(Self::parse_date);

        Ok(quote)
    }
}

// ============================================================================
// MarketDataProvider trait implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let params = [("function", "GLOBAL_QUOTE"), ("symbol", symbol)];
        let text = self.fetch(&params).await?;
        let quote = Self::parse_global_quote(symbol, &text)?;

        debug!("Alpha Vantage: {} @ {}", symbol, quote.price);
        Ok(quote)
    }
}
