use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use stockfolio_core::quotes::Quote;

use crate::{error::ApiResult, main_lib::AppState};

async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<Quote>> {
    let quote = state.quote_service.get_quote(&symbol).await?;
    Ok(Json(quote))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quotes/{symbol}", get(get_quote))
}
