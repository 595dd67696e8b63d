use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use stockfolio_core::{PortfolioSummary, PortfolioValuation};

use crate::{error::ApiResult, main_lib::AppState};

async fn get_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state.valuation_service.summary().await?;
    Ok(Json(summary))
}

/// Enriched holdings and their summary, priced in one pass so the two agree.
async fn get_valuation(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PortfolioValuation>> {
    let valuation = state.valuation_service.valuate().await?;
    if valuation.is_partial {
        tracing::info!(
            "Partial valuation, unpriced: {}",
            valuation.unpriced_symbols.join(", ")
        );
    }
    Ok(Json(valuation))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/summary", get(get_summary))
        .route("/portfolio/valuation", get(get_valuation))
}
