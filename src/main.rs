//! 商品目录服务器

use axum::middleware;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use skin_catalog::core::middleware::request_logging_middleware;
use skin_catalog::infrastructure::{config::load_config, logger::Logger};
use skin_catalog::{router, AppState, Catalog, ProductService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    config.validate()?;

    Logger::init(&config.logging.level);
    info!("启动商品目录服务器...");

    let catalog = Catalog::builtin();
    let dangling = catalog.dangling_category_refs();
    if !dangling.is_empty() {
        tracing::warn!(?dangling, "部分商品的分类不存在");
    }

    let service = ProductService::new(catalog, config.latency.clone());
    let app = router(AppState::new(service))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(config.http.timeout()));

    let address = config.http.socket_address();
    let listener = TcpListener::bind(address.as_str()).await?;

    info!("🚀 服务器运行在 http://{}", address);
    info!("📖 可用端点:");
    info!("   GET /products?category=&search=&sort=");
    info!("   GET /products/:id");
    info!("   GET /products/popular | /products/new");
    info!("   GET /products/search?q= | /products/brand?brand=");
    info!("   GET /products/price-range?min=&max= | /products/skin-type?type=");
    info!("   GET /categories");
    info!("   GET /health");

    axum::serve(listener, app).await?;
    Ok(())
}
