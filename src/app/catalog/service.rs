//! 商品目录业务服务
//!
//! 模拟远程商品 API：每个操作先等待配置的延迟，再查询目录副本。
//! 所有操作都不会失败，未找到时返回 `None` 或空列表。

use std::time::Duration;

use tracing::debug;

use super::data::Catalog;
use super::model::{Category, PriceRange, Product, SortBy};
use super::query;
use crate::infrastructure::config::LatencyConfig;

/// 人气/新品列表的最大长度
pub const HIGHLIGHT_LIMIT: usize = 5;
/// 搜索结果的最大长度
pub const SEARCH_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct ProductService {
    catalog: Catalog,
    latency: LatencyConfig,
}

impl ProductService {
    pub fn new(catalog: Catalog, latency: LatencyConfig) -> Self {
        Self { catalog, latency }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 商品列表（分类、关键字、排序均可选）
    pub async fn list_products(
        &self,
        category: Option<&str>,
        search: Option<&str>,
        sort: SortBy,
    ) -> Vec<Product> {
        simulate_latency(self.latency.list_products()).await;

        let products = query::query_products(self.catalog.products(), category, search, sort);
        debug!(?category, ?search, ?sort, count = products.len(), "商品列表查询");
        products
    }

    /// 按 id 查询商品
    pub async fn get_product_by_id(&self, id: u32) -> Option<Product> {
        simulate_latency(self.latency.product_by_id()).await;

        let product = self.catalog.products().iter().find(|p| p.id == id).cloned();
        debug!(id, found = product.is_some(), "商品详情查询");
        product
    }

    /// 人气商品，目录顺序，最多 5 个
    pub async fn list_popular_products(&self) -> Vec<Product> {
        simulate_latency(self.latency.popular()).await;
        query::take_flagged(self.catalog.products(), |p| p.is_popular, HIGHLIGHT_LIMIT)
    }

    /// 新品，目录顺序，最多 5 个
    pub async fn list_new_products(&self) -> Vec<Product> {
        simulate_latency(self.latency.new_products()).await;
        query::take_flagged(self.catalog.products(), |p| p.is_new, HIGHLIGHT_LIMIT)
    }

    pub async fn list_categories(&self) -> Vec<Category> {
        simulate_latency(self.latency.categories()).await;
        self.catalog.categories().to_vec()
    }

    /// 自动补全用的搜索，空白关键字直接返回空列表
    pub async fn search_products(&self, keyword: &str) -> Vec<Product> {
        if keyword.trim().is_empty() {
            return Vec::new();
        }

        let mut products = self.list_products(None, Some(keyword), SortBy::Featured).await;
        products.truncate(SEARCH_LIMIT);
        products
    }

    /// 品牌完全匹配（不区分大小写）
    pub async fn list_products_by_brand(&self, brand: &str) -> Vec<Product> {
        let brand = brand.to_lowercase();
        let mut products = self.list_products(None, None, SortBy::Featured).await;
        products.retain(|p| p.brand.to_lowercase() == brand);
        products
    }

    pub async fn list_products_by_price_range(&self, range: PriceRange) -> Vec<Product> {
        let mut products = self.list_products(None, None, SortBy::Featured).await;
        products.retain(|p| range.contains(p.price));
        products
    }

    /// 任一适用肤质包含关键字即匹配（不区分大小写）
    pub async fn list_products_by_skin_type(&self, skin_type: &str) -> Vec<Product> {
        let needle = skin_type.to_lowercase();
        let mut products = self.list_products(None, None, SortBy::Featured).await;
        products.retain(|p| p.skin_type.iter().any(|t| t.to_lowercase().contains(&needle)));
        products
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new(Catalog::builtin(), LatencyConfig::default())
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
