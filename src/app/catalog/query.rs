//! 目录查询：过滤与排序
//!
//! 纯同步函数，不涉及延迟，服务层在模拟延迟之后调用。

use std::cmp::Ordering;

use super::data::ALL_CATEGORY;
use super::model::{Product, SortBy};

/// 按分类与关键字过滤，返回新的副本
///
/// 分类为 `"all"` 或缺省时不过滤；关键字不区分大小写，
/// 只要名称、品牌、描述之一包含即匹配。
pub fn filter_products(
    products: &[Product],
    category: Option<&str>,
    search: Option<&str>,
) -> Vec<Product> {
    let needle = search.map(str::to_lowercase);

    products
        .iter()
        .filter(|p| match category {
            Some(category) if category != ALL_CATEGORY => p.category == category,
            _ => true,
        })
        .filter(|p| match needle.as_deref() {
            Some(needle) => matches_search(p, needle),
            None => true,
        })
        .cloned()
        .collect()
}

fn matches_search(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.brand.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// 稳定排序，比较结果相等时保持原有顺序
pub fn sort_products(products: &mut [Product], sort: SortBy) {
    products.sort_by(|a, b| compare(a, b, sort));
}

fn compare(a: &Product, b: &Product, sort: SortBy) -> Ordering {
    match sort {
        SortBy::Popular => b.review_count.cmp(&a.review_count),
        SortBy::Rating => b.rating.total_cmp(&a.rating),
        SortBy::Price => a.price.cmp(&b.price),
        // 只按标记分成两组，不是真正的时间排序
        SortBy::Newest => b.is_new.cmp(&a.is_new),
        SortBy::Featured => b.is_popular.cmp(&a.is_popular),
    }
}

/// 过滤后排序
pub fn query_products(
    products: &[Product],
    category: Option<&str>,
    search: Option<&str>,
    sort: SortBy,
) -> Vec<Product> {
    let mut result = filter_products(products, category, search);
    sort_products(&mut result, sort);
    result
}

/// 按标记取前 `limit` 个，保持目录顺序
pub fn take_flagged(
    products: &[Product],
    flag: impl Fn(&Product) -> bool,
    limit: usize,
) -> Vec<Product> {
    products
        .iter()
        .filter(|p| flag(*p))
        .take(limit)
        .cloned()
        .collect()
}
