use std::sync::Arc;

use crate::config::Config;
use stockfolio_core::{
    quotes::QuoteService, HoldingStoreTrait, HoldingsService, HoldingsServiceTrait,
    InMemoryHoldingStore, ValuationService, ValuationServiceTrait,
};
use stockfolio_market_data::{AlphaVantageProvider, ManualQuoteProvider, MarketDataProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub holdings_service: Arc<dyn HoldingsServiceTrait>,
    pub valuation_service: Arc<dyn ValuationServiceTrait>,
    pub quote_service: Arc<QuoteService>,
}

/// Install the global subscriber. `SF_LOG_FORMAT=text` switches from JSON
/// lines to human-readable output; `RUST_LOG` sets the filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let text = std::env::var("SF_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("text"))
        .unwrap_or(false);
    let registry = tracing_subscriber::registry().with(filter);
    if text {
        registry.with(fmt::layer()).init();
    } else {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    }
}

fn build_provider(config: &Config) -> anyhow::Result<Arc<dyn MarketDataProvider>> {
    match &config.alpha_vantage_api_key {
        Some(api_key) => {
            tracing::info!("Using Alpha Vantage for quotes");
            Ok(Arc::new(AlphaVantageProvider::new(api_key.clone())))
        }
        None => {
            let provider = ManualQuoteProvider::from_spec(&config.manual_prices)?;
            tracing::info!("ALPHA_VANTAGE_API_KEY not set; using manual prices");
            Ok(Arc::new(provider))
        }
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let settings = config.portfolio.clone();
    let store: Arc<dyn HoldingStoreTrait> =
        Arc::new(InMemoryHoldingStore::new(settings.max_holdings));

    let quote_service = Arc::new(QuoteService::new(build_provider(config)?));
    let holdings_service: Arc<dyn HoldingsServiceTrait> = Arc::new(HoldingsService::new(
        store.clone(),
        settings.shares_policy,
    ));
    let valuation_service: Arc<dyn ValuationServiceTrait> = Arc::new(ValuationService::new(
        store,
        quote_service.clone(),
        settings.quote_timeout,
    ));

    match settings.max_holdings {
        Some(max) => tracing::info!(
            "Portfolio ready: max {} holdings, shares policy {}",
            max,
            settings.shares_policy
        ),
        None => tracing::info!(
            "Portfolio ready: unbounded, shares policy {}",
            settings.shares_policy
        ),
    }

    Ok(Arc::new(AppState {
        holdings_service,
        valuation_service,
        quote_service,
    }))
}
