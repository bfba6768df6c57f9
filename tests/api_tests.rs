use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use skin_catalog::{router, AppState, Catalog, Config, LatencyConfig, ProductService};
use std::io::Write;
use tower::ServiceExt;
use tower_http::timeout::TimeoutLayer;

fn app() -> Router {
    router(AppState::new(ProductService::new(
        Catalog::builtin(),
        LatencyConfig::zero(),
    )))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn ids(body: &Value) -> Vec<u64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_list_products_with_query() {
    let (status, body) = get("/products?category=serum&sort=price").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(ids(&body), vec![2, 5, 3]);
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_unknown_sort_uses_default_order() {
    let (_, body) = get("/products?sort=cheapest").await;
    assert_eq!(ids(&body), vec![1, 3, 5, 8, 2, 4, 6, 7]);
}

#[tokio::test]
async fn test_get_product_and_not_found() {
    let (status, body) = get("/products/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["brand"], "isoi");
    assert_eq!(body["data"]["originalPrice"], 42000);
    assert_eq!(body["data"]["latestReview"]["likes"], 42);
    assert!(body.get("total").is_none());

    let (status, body) = get("/products/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let (status, _) = get("/products/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_static_routes_win_over_id() {
    let (_, popular) = get("/products/popular").await;
    assert_eq!(ids(&popular), vec![1, 3, 5, 8]);

    let (_, new) = get("/products/new").await;
    assert_eq!(ids(&new), vec![2, 6]);
}

#[tokio::test]
async fn test_search_brand_and_skin_type_routes() {
    let (_, body) = get("/products/search?q=cosrx").await;
    assert_eq!(ids(&body), vec![5]);

    let (_, body) = get("/products/search").await;
    assert!(ids(&body).is_empty());

    let (_, body) = get("/products/brand?brand=MEDIHEAL").await;
    assert_eq!(ids(&body), vec![8]);

    let (_, body) = get("/products/skin-type?type=%EB%AA%A8%EB%93%A0%ED%94%BC%EB%B6%80").await;
    assert_eq!(ids(&body), vec![6]);
}

#[tokio::test]
async fn test_missing_filter_params_default_to_empty() {
    let (status, body) = get("/products/skin-type").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body).len(), 8);

    let (status, body) = get("/products/brand").await;
    assert_eq!(status, StatusCode::OK);
    assert!(ids(&body).is_empty());
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_price_range_route() {
    let (status, body) = get("/products/price-range?min=0&max=10000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![8, 7]);

    let (status, body) = get("/products/price-range?min=10&max=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_categories_and_health() {
    let (status, body) = get("/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 8);
    assert_eq!(body["data"][1]["id"], "skincare");

    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["catalog"]["products_count"], 8);
}

#[test]
fn test_config_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[http]\nport = 8088\n\n[latency]\nlist_products_ms = 0\nproduct_by_id_ms = 0"
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.http.port, 8088);
    assert_eq!(config.http.bind_address, "127.0.0.1");
    assert_eq!(config.latency.list_products_ms, 0);
    assert_eq!(config.latency.popular_ms, 600);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_config_file_is_read_error() {
    let result = Config::load_from_file("/nonexistent/skin-catalog.toml");
    assert!(result.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_validated_latency_finishes_within_timeout() {
    let config = Config::default();
    config.validate().unwrap();

    let app = router(AppState::new(ProductService::new(
        Catalog::builtin(),
        config.latency.clone(),
    )))
    .layer(TimeoutLayer::new(config.http.timeout()));

    let response = app
        .oneshot(Request::builder().uri("/products").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn test_latency_longer_than_timeout_fails_validation() {
    let config = Config::from_toml_str(
        "[http]\ntimeout_seconds = 1\n\n[latency]\nlist_products_ms = 5000",
    )
    .unwrap();
    assert!(config.validate().is_err());
}
