//! 商品目录数据模型

use serde::{Deserialize, Serialize};

/// 商品记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub brand: String,
    /// 对应 `Category::id`，运行时不校验
    pub category: String,
    pub price: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,
    pub rating: f32,
    pub review_count: u32,
    /// 图片资源句柄，由客户端解析
    pub image: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub skin_type: Vec<String>,
    pub benefits: Vec<String>,
    pub volume: String,
    pub is_popular: bool,
    pub is_new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_review: Option<LatestReview>,
}

/// 最新评论摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestReview {
    pub user: String,
    pub content: String,
    /// 相对时间，如 "2일 전"
    pub date: String,
    pub rating: u8,
    pub likes: u32,
}

/// 商品分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// 列表排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// 评论数降序
    Popular,
    /// 评分降序
    Rating,
    /// 价格升序
    Price,
    /// 新品在前
    Newest,
    /// 默认排序：人气商品在前
    #[default]
    Featured,
}

impl SortBy {
    /// 解析排序参数，未知值或缺省时回退到默认排序
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("popular") => SortBy::Popular,
            Some("rating") => SortBy::Rating,
            Some("price") => SortBy::Price,
            Some("newest") => SortBy::Newest,
            _ => SortBy::Featured,
        }
    }
}

/// 商品列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

/// 价格区间（闭区间）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_falls_back_to_featured() {
        assert_eq!(SortBy::parse(Some("price")), SortBy::Price);
        assert_eq!(SortBy::parse(Some("newest")), SortBy::Newest);
        assert_eq!(SortBy::parse(Some("PRICE")), SortBy::Featured);
        assert_eq!(SortBy::parse(Some("cheapest")), SortBy::Featured);
        assert_eq!(SortBy::parse(None), SortBy::Featured);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let range = PriceRange { min: 10000, max: 20000 };
        assert!(range.contains(10000));
        assert!(range.contains(20000));
        assert!(!range.contains(20001));
        assert!(!range.is_empty());
        assert!(PriceRange { min: 2, max: 1 }.is_empty());
    }

    #[test]
    fn test_product_serializes_camel_case_and_skips_missing() {
        let product = Product {
            id: 9,
            name: "테스트".to_string(),
            brand: "Brand".to_string(),
            category: "mask".to_string(),
            price: 1000,
            original_price: None,
            rating: 4.0,
            review_count: 3,
            image: "product1".to_string(),
            description: String::new(),
            ingredients: vec![],
            skin_type: vec!["건성".to_string()],
            benefits: vec![],
            volume: "10ml".to_string(),
            is_popular: false,
            is_new: true,
            latest_review: None,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["reviewCount"], 3);
        assert_eq!(json["isNew"], true);
        assert_eq!(json["skinType"][0], "건성");
        assert!(json.get("originalPrice").is_none());
        assert!(json.get("latestReview").is_none());
    }
}
