use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use stockfolio_core::settings::{parse_max_holdings, PortfolioSettings, SharesPolicy};

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub portfolio: PortfolioSettings,
    /// When unset, quotes come from `manual_prices` instead of Alpha Vantage.
    pub alpha_vantage_api_key: Option<String>,
    /// `SYMBOL=PRICE` pairs, comma separated.
    pub manual_prices: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listen_addr: SocketAddr = lookup("SF_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid SF_LISTEN_ADDR")?;
        let cors_allow = lookup("SF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = match lookup("SF_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid SF_REQUEST_TIMEOUT_MS '{}'", raw))?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        let mut portfolio = PortfolioSettings::default();
        if let Some(raw) = lookup("SF_MAX_HOLDINGS") {
            portfolio = portfolio.with_max_holdings(parse_max_holdings(&raw)?);
        }
        if let Some(raw) = lookup("SF_SHARES_POLICY") {
            portfolio = portfolio.with_shares_policy(raw.parse::<SharesPolicy>()?);
        }
        if let Some(raw) = lookup("SF_QUOTE_TIMEOUT_MS") {
            let ms: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid SF_QUOTE_TIMEOUT_MS '{}'", raw))?;
            portfolio = portfolio.with_quote_timeout(Duration::from_millis(ms));
        }

        let alpha_vantage_api_key = lookup("ALPHA_VANTAGE_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let manual_prices = lookup("SF_MANUAL_PRICES").unwrap_or_default();

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            portfolio,
            alpha_vantage_api_key,
            manual_prices,
        })
    }
}
