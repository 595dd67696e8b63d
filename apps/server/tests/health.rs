use axum::{body::Body, http::Request};
use stockfolio_server::{api::app_router, build_state, config::Config};
use tower::ServiceExt;

#[tokio::test]
async fn healthz_works() {
    let config = Config::from_lookup(|_| None).unwrap();
    let state = build_state(&config).await.unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn bad_manual_prices_fail_startup() {
    let config = Config::from_lookup(|key| match key {
        "SF_MANUAL_PRICES" => Some("AAPL:190".to_string()),
        _ => None,
    })
    .unwrap();
    assert!(build_state(&config).await.is_err());
}
