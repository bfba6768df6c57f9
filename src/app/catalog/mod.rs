//! 商品目录：静态数据与模拟数据访问层

pub mod data;
pub mod handler;
pub mod model;
pub mod query;
pub mod service;

pub use data::Catalog;
pub use model::{Category, LatestReview, PriceRange, Product, ProductQuery, SortBy};
pub use service::ProductService;
