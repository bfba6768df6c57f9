//! # 护肤品目录服务
//!
//! 内存中的静态商品目录，以及模拟远程商品 API 的异步数据访问层：
//! - `app::catalog` 商品数据、查询与 HTTP 处理器
//! - `app::theme` 按钮组件与样式表
//! - `core` 错误、响应包装与中间件
//! - `infrastructure` 配置与日志

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::catalog::{Catalog, Category, Product, ProductService, SortBy};
pub use app::{router, AppState};
pub use infrastructure::config::{Config, LatencyConfig};
