//! 商品目录处理器

use axum::extract::{Path, Query, State};
use serde::Deserialize;

use super::model::{Category, PriceRange, Product, ProductQuery, SortBy};
use crate::app::AppState;
use crate::core::{error::CoreError, response::ApiResponse};

type ProductList = ApiResponse<Vec<Product>>;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct BrandQuery {
    #[serde(default)]
    pub brand: String,
}

#[derive(Debug, Deserialize)]
pub struct SkinTypeQuery {
    #[serde(default, rename = "type")]
    pub skin_type: String,
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> ProductList {
    let products = state
        .product_service
        .list_products(
            query.category.as_deref(),
            query.search.as_deref(),
            SortBy::parse(query.sort.as_deref()),
        )
        .await;
    ApiResponse::list(products)
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<ApiResponse<Product>, CoreError> {
    state
        .product_service
        .get_product_by_id(id)
        .await
        .map(ApiResponse::success)
        .ok_or_else(|| CoreError::NotFound(format!("商品 {} 不存在", id)))
}

pub async fn list_popular_products(State(state): State<AppState>) -> ProductList {
    ApiResponse::list(state.product_service.list_popular_products().await)
}

pub async fn list_new_products(State(state): State<AppState>) -> ProductList {
    ApiResponse::list(state.product_service.list_new_products().await)
}

pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ProductList {
    ApiResponse::list(state.product_service.search_products(&query.q).await)
}

pub async fn list_products_by_brand(
    State(state): State<AppState>,
    Query(query): Query<BrandQuery>,
) -> ProductList {
    ApiResponse::list(state.product_service.list_products_by_brand(&query.brand).await)
}

pub async fn list_products_by_price_range(
    State(state): State<AppState>,
    Query(range): Query<PriceRange>,
) -> Result<ProductList, CoreError> {
    if range.is_empty() {
        return Err(CoreError::BadRequest(format!(
            "无效的价格区间: {} > {}",
            range.min, range.max
        )));
    }

    let products = state.product_service.list_products_by_price_range(range).await;
    Ok(ApiResponse::list(products))
}

/// 缺省的 `type` 视为空串，匹配所有商品
pub async fn list_products_by_skin_type(
    State(state): State<AppState>,
    Query(query): Query<SkinTypeQuery>,
) -> ProductList {
    ApiResponse::list(
        state
            .product_service
            .list_products_by_skin_type(&query.skin_type)
            .await,
    )
}

pub async fn list_categories(State(state): State<AppState>) -> ApiResponse<Vec<Category>> {
    ApiResponse::list(state.product_service.list_categories().await)
}
