use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use stockfolio_core::{EnrichedHolding, Holding, NewHolding};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

/// Holdings in insertion order, each with a live price when one was found.
async fn list_holdings(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<EnrichedHolding>>> {
    let holdings = state.valuation_service.list_enriched().await?;
    Ok(Json(holdings))
}

async fn add_holding(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewHolding>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Holding>)> {
    let Json(new_holding) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let holding = state.holdings_service.add_holding(new_holding).await?;
    Ok((StatusCode::CREATED, Json(holding)))
}

async fn remove_holding(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<StatusCode> {
    state.holdings_service.remove_holding(&symbol).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/holdings", get(list_holdings).post(add_holding))
        .route("/holdings/{symbol}", delete(remove_holding))
}
