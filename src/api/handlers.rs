use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{Product, RecommendationBundle, User};
use crate::services::Recommender;

use super::AppState;

/// Optional user context for product recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub user_id: Option<u64>,
}

/// Root endpoint to check that the API is running
pub async fn root() -> Json<Value> {
    Json(json!({ "status": "Shop Mart API is running!" }))
}

/// Get all products in the catalog
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}

/// Get a single product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<u64>,
) -> AppResult<Json<Product>> {
    let product = state
        .catalog
        .product(product_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
    Ok(Json(product))
}

/// Get a single user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> AppResult<Json<User>> {
    let user = state
        .catalog
        .user(user_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}

/// Get the personalized recommendation bundle for a user
pub async fn user_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> AppResult<Json<RecommendationBundle>> {
    let bundle = Recommender::new(&state.catalog).for_user(user_id, &mut rand::thread_rng())?;
    Ok(Json(bundle))
}

/// Get "customers also bought" recommendations for a product
pub async fn product_recommendations(
    State(state): State<AppState>,
    Path(product_id): Path<u64>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationBundle>> {
    let bundle = Recommender::new(&state.catalog).for_product(
        product_id,
        query.user_id,
        &mut rand::thread_rng(),
    )?;
    Ok(Json(bundle))
}
