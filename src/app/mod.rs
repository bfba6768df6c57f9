//! 应用层

pub mod catalog;
pub mod theme;

use axum::{extract::State, response::Json, routing::get, Router};

use catalog::{handler, ProductService};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self { product_service }
    }
}

/// 商品目录路由，静态路径优先于 `/products/:id`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/products", get(handler::list_products))
        .route("/products/popular", get(handler::list_popular_products))
        .route("/products/new", get(handler::list_new_products))
        .route("/products/search", get(handler::search_products))
        .route("/products/brand", get(handler::list_products_by_brand))
        .route("/products/price-range", get(handler::list_products_by_price_range))
        .route("/products/skin-type", get(handler::list_products_by_skin_type))
        .route("/products/:id", get(handler::get_product))
        .route("/categories", get(handler::list_categories))
        .route("/health", get(health_check))
        .with_state(state)
}

/// 健康检查
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let catalog = state.product_service.catalog();

    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "catalog": {
            "type": "in-memory",
            "products_count": catalog.products().len(),
            "categories_count": catalog.categories().len()
        }
    }))
}
