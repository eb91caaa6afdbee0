use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
///
/// CORS is wide open: the storefront is served from a different origin and
/// every endpoint is a public read.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        // Products
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/:product_id", get(handlers::get_product))
        // Users
        .route("/api/users/:user_id", get(handlers::get_user))
        // Recommendations
        .route(
            "/api/recommendations/:user_id",
            get(handlers::user_recommendations),
        )
        .route(
            "/api/recommendations/product/:product_id",
            get(handlers::product_recommendations),
        )
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
