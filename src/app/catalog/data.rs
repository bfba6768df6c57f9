//! 静态商品目录
//!
//! 数据在首次访问时构建，之后整个进程内只读。

use std::sync::{Arc, OnceLock};

use super::model::{Category, LatestReview, Product};

static PRODUCTS: OnceLock<Vec<Product>> = OnceLock::new();
static CATEGORIES: OnceLock<Vec<Category>> = OnceLock::new();

/// 表示"不过滤"的分类标识
pub const ALL_CATEGORY: &str = "all";

/// 内置商品数据
pub fn products() -> &'static [Product] {
    PRODUCTS.get_or_init(build_products)
}

/// 内置分类数据
pub fn categories() -> &'static [Category] {
    CATEGORIES.get_or_init(build_categories)
}

/// 商品目录句柄
///
/// 克隆只复制 `Arc`，查询结果总是新分配的副本。
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
    categories: Arc<[Category]>,
}

impl Catalog {
    /// 使用自定义数据集，测试中用来替换内置目录
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products: products.into(),
            categories: categories.into(),
        }
    }

    /// 内置静态目录
    pub fn builtin() -> Self {
        Self::new(products().to_vec(), categories().to_vec())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// 分类字段指向未知分类的商品 id
    pub fn dangling_category_refs(&self) -> Vec<u32> {
        self.products
            .iter()
            .filter(|p| !self.categories.iter().any(|c| c.id == p.category))
            .map(|p| p.id)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn review(user: &str, content: &str, date: &str, rating: u8, likes: u32) -> Option<LatestReview> {
    Some(LatestReview {
        user: user.to_string(),
        content: content.to_string(),
        date: date.to_string(),
        rating,
        likes,
    })
}

fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: None,
    }
}

fn build_categories() -> Vec<Category> {
    vec![
        category(ALL_CATEGORY, "전체"),
        category("skincare", "스킨케어"),
        category("makeup", "메이크업"),
        category("suncare", "선케어"),
        category("cleansing", "클렌징"),
        category("mask", "마스크"),
        category("serum", "세럼"),
        category("moisturizer", "보습제"),
    ]
}

fn build_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Beplain 녹두 진정 토너".to_string(),
            brand: "Beplain".to_string(),
            category: "skincare".to_string(),
            price: 18000,
            original_price: Some(22000),
            rating: 4.5,
            review_count: 128,
            image: "product1".to_string(),
            description: "민감한 피부를 위한 녹두 추출물 함유 진정 토너입니다. 자극 없이 부드럽게 피부를 정돈해줍니다.".to_string(),
            ingredients: strings(&["녹두 추출물", "판테놀", "나이아신아마이드", "히알루론산"]),
            skin_type: strings(&["민감성", "건성", "복합성"]),
            benefits: strings(&["진정", "보습", "각질케어"]),
            volume: "200ml".to_string(),
            is_popular: true,
            is_new: false,
            latest_review: review(
                "피부좋아짐",
                "민감성 피부에 딱 좋아요! 자극 없이 진정되는 느낌이에요.",
                "2일 전",
                5,
                24,
            ),
        },
        Product {
            id: 2,
            name: "Torriden 다이브인 세럼".to_string(),
            brand: "Torriden".to_string(),
            category: "serum".to_string(),
            price: 15000,
            original_price: None,
            rating: 4.2,
            review_count: 86,
            image: "product2".to_string(),
            description: "5가지 히알루론산으로 깊은 수분 공급을 해주는 보습 세럼입니다.".to_string(),
            ingredients: strings(&["히알루론산", "판테놀", "알란토인", "베타글루칸"]),
            skin_type: strings(&["건성", "복합성", "지성"]),
            benefits: strings(&["보습", "수분공급", "탄력"]),
            volume: "50ml".to_string(),
            is_popular: false,
            is_new: true,
            latest_review: review(
                "화장품매니아",
                "수분감이 오래 지속되고 흡수도 잘 돼요. 가성비 좋은 제품입니다.",
                "1주일 전",
                4,
                18,
            ),
        },
        Product {
            id: 3,
            name: "아이소이 불가리안 로즈 세럼".to_string(),
            brand: "isoi".to_string(),
            category: "serum".to_string(),
            price: 35000,
            original_price: Some(42000),
            rating: 4.7,
            review_count: 215,
            image: "product1".to_string(),
            description: "불가리안 로즈 오일과 펩타이드가 함유된 안티에이징 세럼입니다.".to_string(),
            ingredients: strings(&["불가리안 로즈 오일", "펩타이드", "아데노신", "나이아신아마이드"]),
            skin_type: strings(&["건성", "성숙성", "복합성"]),
            benefits: strings(&["안티에이징", "탄력", "영양공급"]),
            volume: "30ml".to_string(),
            is_popular: true,
            is_new: false,
            latest_review: review(
                "로즈덕후",
                "향이 너무 좋고 피부결이 정돈되는 느낌이에요. 꾸준히 쓰고 있어요.",
                "3일 전",
                5,
                42,
            ),
        },
        Product {
            id: 4,
            name: "라운드랩 자작나무 수분 크림".to_string(),
            brand: "Round Lab".to_string(),
            category: "moisturizer".to_string(),
            price: 22000,
            original_price: None,
            rating: 4.3,
            review_count: 167,
            image: "product2".to_string(),
            description: "자작나무 수액으로 만든 깊은 보습 크림입니다. 끈적임 없이 촉촉함을 유지해줍니다.".to_string(),
            ingredients: strings(&["자작나무 수액", "세라마이드", "스쿠알란", "히알루론산"]),
            skin_type: strings(&["건성", "복합성", "민감성"]),
            benefits: strings(&["보습", "수분공급", "진정"]),
            volume: "80ml".to_string(),
            is_popular: false,
            is_new: false,
            latest_review: review(
                "수분부족",
                "건조한 피부에 수분을 채워주는 느낌이에요. 가볍게 발리고 좋아요.",
                "5일 전",
                4,
                31,
            ),
        },
        Product {
            id: 5,
            name: "코스알엑스 스네일 무친 에센스".to_string(),
            brand: "COSRX".to_string(),
            category: "serum".to_string(),
            price: 25000,
            original_price: None,
            rating: 4.6,
            review_count: 324,
            image: "product1".to_string(),
            description: "96% 달팽이 분비물 여과액으로 만든 진정 에센스입니다.".to_string(),
            ingredients: strings(&["달팽이 분비물 여과액", "히알루론산", "판테놀", "아르기닌"]),
            skin_type: strings(&["지성", "복합성", "트러블성"]),
            benefits: strings(&["진정", "재생", "트러블케어"]),
            volume: "96ml".to_string(),
            is_popular: true,
            is_new: false,
            latest_review: review(
                "달팽이덕후",
                "트러블 진정에 효과가 좋아요. 꾸준히 사용하면 피부결이 확실히 좋아져요.",
                "1일 전",
                5,
                56,
            ),
        },
        Product {
            id: 6,
            name: "에뛰드하우스 선프라이즈 마일드 워터리 라이트".to_string(),
            brand: "ETUDE HOUSE".to_string(),
            category: "suncare".to_string(),
            price: 12000,
            original_price: None,
            rating: 4.1,
            review_count: 89,
            image: "product2".to_string(),
            description: "SPF50+ PA+++ 자외선 차단제로 가볍고 촉촉한 사용감을 제공합니다.".to_string(),
            ingredients: strings(&["징크옥사이드", "티타늄디옥사이드", "히알루론산", "알로에 추출물"]),
            skin_type: strings(&["모든피부", "민감성"]),
            benefits: strings(&["자외선차단", "보습", "진정"]),
            volume: "50ml".to_string(),
            is_popular: false,
            is_new: true,
            latest_review: review(
                "자외선차단필수",
                "끈적이지 않고 백탁현상도 없어서 매일 사용하기 좋아요.",
                "4일 전",
                4,
                15,
            ),
        },
        Product {
            id: 7,
            name: "이니스프리 그린티 클렌징 폼".to_string(),
            brand: "innisfree".to_string(),
            category: "cleansing".to_string(),
            price: 8000,
            original_price: None,
            rating: 4.0,
            review_count: 203,
            image: "product1".to_string(),
            description: "제주 녹차 추출물이 함유된 순한 클렌징 폼입니다.".to_string(),
            ingredients: strings(&["녹차 추출물", "글리세린", "코코일 글루타민산", "살리실산"]),
            skin_type: strings(&["지성", "복합성", "트러블성"]),
            benefits: strings(&["클렌징", "진정", "모공케어"]),
            volume: "150ml".to_string(),
            is_popular: false,
            is_new: false,
            latest_review: review(
                "클렌징마니아",
                "거품이 풍성하고 세정력이 좋아요. 세안 후 당김도 없어서 만족해요.",
                "1주일 전",
                4,
                22,
            ),
        },
        Product {
            id: 8,
            name: "메디힐 티트리 케어 솔루션 마스크".to_string(),
            brand: "MEDIHEAL".to_string(),
            category: "mask".to_string(),
            price: 2500,
            original_price: None,
            rating: 4.4,
            review_count: 156,
            image: "product2".to_string(),
            description: "티트리 추출물로 트러블 진정에 도움을 주는 시트 마스크입니다.".to_string(),
            ingredients: strings(&["티트리 추출물", "살리실산", "나이아신아마이드", "알란토인"]),
            skin_type: strings(&["지성", "트러블성", "복합성"]),
            benefits: strings(&["진정", "트러블케어", "모공케어"]),
            volume: "25ml (1매)".to_string(),
            is_popular: true,
            is_new: false,
            latest_review: review(
                "마스크덕후",
                "트러블이 있을 때 사용하면 다음날 확실히 진정돼요. 가성비 좋아요.",
                "3일 전",
                5,
                33,
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_product_ids_are_unique() {
        let ids: HashSet<u32> = products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products().len());
        assert_eq!(products().len(), 8);
    }

    #[test]
    fn test_builtin_categories_cover_all_products() {
        let catalog = Catalog::builtin();
        assert!(catalog.dangling_category_refs().is_empty());
        assert_eq!(catalog.categories()[0].id, ALL_CATEGORY);
    }

    #[test]
    fn test_dangling_category_is_reported() {
        let mut orphan = products()[0].clone();
        orphan.category = "bodycare".to_string();
        let catalog = Catalog::new(vec![orphan], categories().to_vec());
        assert_eq!(catalog.dangling_category_refs(), vec![1]);
    }
}
