use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use stockfolio_server::{api::app_router, build_state, config::Config};
use tower::ServiceExt;

async fn app_with(vars: &[(&str, &str)]) -> Router {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = Config::from_lookup(|key| {
        vars.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
    .unwrap();
    let state = build_state(&config).await.unwrap();
    app_router(state, &config)
}

async fn app() -> Router {
    app_with(&[("SF_MANUAL_PRICES", "AAPL=190.5,GOOG=100")]).await
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn add(app: &Router, symbol: &str, shares: f64, purchase_price: f64) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/v1/holdings",
        Some(json!({ "symbol": symbol, "shares": shares, "purchasePrice": purchase_price })),
    )
    .await
}

#[tokio::test]
async fn add_then_list_attaches_prices() {
    let app = app().await;

    let (status, created) = add(&app, " aapl ", 10.0, 150.0).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["symbol"], "AAPL");
    assert!(created["id"].as_str().is_some());
    assert!(created.get("currentPrice").is_none());

    let (status, list) = send(&app, "GET", "/api/v1/holdings", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["symbol"], "AAPL");
    assert_eq!(list[0]["currentPrice"].as_f64(), Some(190.5));
    assert_eq!(list[0]["marketValue"].as_f64(), Some(1905.0));
    assert_eq!(list[0]["gainLoss"].as_f64(), Some(405.0));
    assert_eq!(list[0]["percentChange"].as_f64(), Some(27.0));
}

#[tokio::test]
async fn validation_failures_are_bad_requests() {
    let app = app().await;

    let (status, body) = add(&app, "TOOLONG", 1.0, 10.0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, _) = add(&app, "AAPL", 0.0, 10.0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = add(&app, "AAPL", 1.0, -5.0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/holdings",
        Some(json!({ "symbol": "AAPL" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (_, list) = send(&app, "GET", "/api/v1/holdings", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn duplicate_and_capacity_conflict() {
    let app = app_with(&[("SF_MAX_HOLDINGS", "2")]).await;

    assert_eq!(add(&app, "AAPL", 1.0, 100.0).await.0, StatusCode::CREATED);
    let (status, body) = add(&app, "aapl", 2.0, 120.0).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 409);

    assert_eq!(add(&app, "MSFT", 1.0, 300.0).await.0, StatusCode::CREATED);
    let (status, _) = add(&app, "GOOG", 1.0, 90.0).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn exactly_one_share_policy() {
    let app = app_with(&[("SF_SHARES_POLICY", "exactly_one")]).await;

    assert_eq!(add(&app, "AAPL", 2.0, 100.0).await.0, StatusCode::BAD_REQUEST);
    assert_eq!(add(&app, "AAPL", 1.0, 100.0).await.0, StatusCode::CREATED);
}

#[tokio::test]
async fn remove_then_remove_again() {
    let app = app().await;
    add(&app, "AAPL", 1.0, 100.0).await;

    let (status, _) = send(&app, "DELETE", "/api/v1/holdings/aapl", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "DELETE", "/api/v1/holdings/AAPL", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn summary_and_partial_valuation() {
    let app = app().await;
    add(&app, "AAPL", 10.0, 150.0).await;
    add(&app, "MSFT", 2.0, 300.0).await;

    let (status, summary) = send(&app, "GET", "/api/v1/portfolio/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalValue"].as_f64(), Some(2505.0));
    assert_eq!(summary["totalInvestment"].as_f64(), Some(2100.0));
    assert_eq!(summary["totalGainLoss"].as_f64(), Some(405.0));
    assert_eq!(summary["gainLossPercentage"].as_f64(), Some(19.2857));
    assert_eq!(summary["topPerformer"]["symbol"], "AAPL");
    assert_eq!(summary["holdingCount"], 2);
    assert_eq!(summary["pricedCount"], 1);

    let (status, valuation) = send(&app, "GET", "/api/v1/portfolio/valuation", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(valuation["isPartial"], true);
    assert_eq!(valuation["unpricedSymbols"], json!(["MSFT"]));
    assert_eq!(valuation["holdings"][1]["currentPrice"], Value::Null);
    assert_eq!(valuation["holdings"][1]["marketValue"].as_f64(), Some(600.0));
}

#[tokio::test]
async fn empty_portfolio_summary() {
    let app = app().await;

    let (status, summary) = send(&app, "GET", "/api/v1/portfolio/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalValue"].as_f64(), Some(0.0));
    assert_eq!(summary["gainLossPercentage"].as_f64(), Some(0.0));
    assert_eq!(summary["topPerformer"], Value::Null);
}

#[tokio::test]
async fn quote_lookup() {
    let app = app().await;

    let (status, quote) = send(&app, "GET", "/api/v1/quotes/aapl", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["symbol"], "AAPL");
    assert_eq!(quote["price"].as_f64(), Some(190.5));

    let (status, body) = send(&app, "GET", "/api/v1/quotes/ZZZZ", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], 502);

    let (status, _) = send(&app, "GET", "/api/v1/quotes/TOOLONG", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_holding_is_rejected_and_portfolio_stays_readable() {
    let app = app().await;

    let (status, body) = add(&app, "AAPL", 1e20, 1e20).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    assert_eq!(add(&app, "GOOG", 1e9, 1e9).await.0, StatusCode::CREATED);
    let (status, summary) = send(&app, "GET", "/api/v1/portfolio/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["holdingCount"], 1);
}
