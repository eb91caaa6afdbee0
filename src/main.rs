use shop_mart_api::api::{create_router, AppState};
use shop_mart_api::catalog::CatalogStore;
use shop_mart_api::config::Config;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shop_mart_api=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;

    // Seed the catalog once; it is read-only from here on
    let catalog = CatalogStore::from_seed()?;
    tracing::info!(
        products = catalog.product_count(),
        default_user = catalog.default_user_id(),
        "Catalog seeded"
    );

    let state = AppState::new(catalog);
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Shop Mart API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
